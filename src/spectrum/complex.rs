use num_complex::Complex;

/// Parse the complex literal at the start of `line`.
///
/// Accepted shape: optional `(`, number, `,`, number, optional `)`. Anything
/// after the closing token is ignored. An opening `(` must be matched by `)`
/// right after the imaginary part, and an unbracketed pair must end at
/// whitespace, `)` or end of line, so `(1,2,3)` yields nothing.
pub fn parse_complex_literal(line: &str) -> Option<Complex<f64>> {
    let mut rest = line.trim_start();
    let bracketed = match rest.strip_prefix('(') {
        Some(after) => {
            rest = after;
            true
        }
        None => false,
    };

    let (re, after_re) = take_number(rest)?;
    let after_comma = after_re.trim_start().strip_prefix(',')?;
    let (im, after_im) = take_number(after_comma)?;
    let tail = after_im.trim_start();

    let closed = if bracketed {
        tail.starts_with(')')
    } else {
        tail.is_empty() || tail.starts_with(')') || after_im.starts_with(char::is_whitespace)
    };
    closed.then(|| Complex::new(re, im))
}

/// Consume one decimal number (sign, digits, fraction, exponent) after
/// optional leading whitespace.
fn take_number(input: &str) -> Option<(f64, &str)> {
    let s = input.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }
    let int_digits = count_digits(&bytes[end..]);
    end += int_digits;

    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = count_digits(&bytes[end + 1..]);
        if int_digits > 0 || frac_digits > 0 {
            end += 1 + frac_digits;
        }
    }
    if int_digits == 0 && frac_digits == 0 {
        return None;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits = count_digits(&bytes[exp_end..]);
        if exp_digits > 0 {
            end = exp_end + exp_digits;
        }
    }

    let value = s[..end].parse::<f64>().ok()?;
    Some((value, &s[end..]))
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}
