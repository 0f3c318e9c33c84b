//! Terminal QR code rendering.

use qrcode::render::unicode::Dense1x2;
use qrcode::types::QrError;
use qrcode::QrCode;

/// Encode `payload` as a QR code drawn with half-block characters, two
/// module rows per text line, quiet zone included.
///
/// The symbol version is picked from the payload size. Fails when the
/// payload does not fit in the largest version.
pub fn render_qr(payload: &str) -> Result<String, QrError> {
    let code = QrCode::new(payload.as_bytes())?;
    Ok(code.render::<Dense1x2>().quiet_zone(true).build())
}

#[cfg(test)]
mod tests {
    use super::*;

    const BLOCKS: [char; 4] = [' ', '▀', '▄', '█'];

    #[test]
    fn test_render_is_square_block_art() {
        let art = render_qr("BEGIN:VCARD\nN:Perez;Juan;;;\nEND:VCARD").unwrap();
        let lines: Vec<&str> = art.lines().collect();
        let width = lines[0].chars().count();

        // Version 1 is 21 modules wide, plus a 4-module quiet zone per side.
        assert!(width >= 29);
        assert!(lines.iter().all(|l| l.chars().count() == width));
        assert!(art.chars().all(|c| c == '\n' || BLOCKS.contains(&c)));
        // Two module rows per line.
        assert!(lines.len() * 2 >= width - 1 && lines.len() * 2 <= width + 1);
    }

    #[test]
    fn test_payload_too_large() {
        assert!(render_qr(&"x".repeat(4000)).is_err());
    }
}
