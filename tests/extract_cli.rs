use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;

/// Write a 16-bit PCM WAV file with the given interleaved samples.
fn write_wav(path: &Path, sample_rate: u32, channels: u16, samples: &[i16]) {
    let data_len = (samples.len() * 2) as u32;
    let block_align = channels * 2;
    let mut bytes = Vec::with_capacity(44 + data_len as usize);
    bytes.extend_from_slice(b"RIFF");
    bytes.extend_from_slice(&(36 + data_len).to_le_bytes());
    bytes.extend_from_slice(b"WAVE");
    bytes.extend_from_slice(b"fmt ");
    bytes.extend_from_slice(&16u32.to_le_bytes());
    bytes.extend_from_slice(&1u16.to_le_bytes());
    bytes.extend_from_slice(&channels.to_le_bytes());
    bytes.extend_from_slice(&sample_rate.to_le_bytes());
    bytes.extend_from_slice(&(sample_rate * block_align as u32).to_le_bytes());
    bytes.extend_from_slice(&block_align.to_le_bytes());
    bytes.extend_from_slice(&16u16.to_le_bytes());
    bytes.extend_from_slice(b"data");
    bytes.extend_from_slice(&data_len.to_le_bytes());
    for s in samples {
        bytes.extend_from_slice(&s.to_le_bytes());
    }
    fs::write(path, bytes).unwrap();
}

fn tone(len: usize) -> Vec<i16> {
    (0..len).map(|i| ((i % 64) as i16 - 32) * 512).collect()
}

fn extract_cmd() -> Command {
    Command::cargo_bin("extract-samples").unwrap()
}

#[test]
fn writes_every_sample_by_default() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("tone.wav");
    write_wav(&input, 8_000, 1, &tone(8_000));

    extract_cmd()
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains("Saved 8000 samples"));

    let text = fs::read_to_string(dir.path().join("tone.txt")).unwrap();
    assert_eq!(text.lines().count(), 8_000);
    assert!(text.ends_with('\n'));
    for line in text.lines().take(100) {
        let (_, frac) = line.split_once('.').unwrap();
        assert_eq!(frac.len(), 6);
    }
}

#[test]
fn truncates_to_requested_seconds() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("tone.wav");
    let output = dir.path().join("first.txt");
    write_wav(&input, 8_000, 1, &tone(8_000));

    extract_cmd()
        .arg(&input)
        .args(["-o"])
        .arg(&output)
        .args(["-s", "0.25"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Saved 2000 samples"));

    assert_eq!(fs::read_to_string(&output).unwrap().lines().count(), 2_000);
}

#[test]
fn window_longer_than_audio_keeps_everything() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("short.wav");
    let output = dir.path().join("short.txt");
    write_wav(&input, 8_000, 1, &tone(1_000));

    extract_cmd()
        .arg(&input)
        .arg("--output")
        .arg(&output)
        .args(["--seconds", "10"])
        .assert()
        .success();

    assert_eq!(fs::read_to_string(&output).unwrap().lines().count(), 1_000);
}

#[test]
fn stereo_is_downmixed_to_mono() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("stereo.wav");
    let output = dir.path().join("stereo.txt");
    let frames: Vec<i16> = (0..200).flat_map(|_| [16_384, -16_384]).collect();
    write_wav(&input, 4_000, 2, &frames);

    extract_cmd().arg(&input).arg("-o").arg(&output).assert().success();

    let text = fs::read_to_string(&output).unwrap();
    assert_eq!(text.lines().count(), 200);
    assert!(text.lines().all(|line| line == "0.000000"));
}

#[test]
fn missing_input_fails_without_output() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("absent.m4a");

    extract_cmd()
        .arg(&input)
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));

    assert!(!dir.path().join("absent.txt").exists());
}

#[test]
fn undecodable_input_fails() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("noise.m4a");
    fs::write(&input, b"this is not an audio container").unwrap();

    extract_cmd()
        .arg(&input)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to decode"));

    assert!(!dir.path().join("noise.txt").exists());
}
