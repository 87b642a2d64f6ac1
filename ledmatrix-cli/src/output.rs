//! Text renderings of an export, one per `--format` value.

use anyhow::Result;
use ledmatrix::export::{Bitmap, ExportStyle};
use ledmatrix::grid::ROWS;
use ledmatrix::ht16k33::{self, Blink};
use serde::Serialize;

pub const FORMATS: &str = "'c', 'hex', 'json' or 'ht16k33'";

/// Controller settings written by the `ht16k33` init sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeviceSettings {
    pub brightness: u8,
    pub blink: Blink,
}

impl Default for DeviceSettings {
    fn default() -> Self {
        DeviceSettings {
            brightness: 15,
            blink: Blink::Off,
        }
    }
}

/// Parse a blink rate: "off", "2hz", "1hz" or "0.5hz".
pub fn parse_blink(spec: &str) -> Result<Blink, String> {
    match spec.trim().to_ascii_lowercase().as_str() {
        "off" => Ok(Blink::Off),
        "2hz" => Ok(Blink::Hz2),
        "1hz" => Ok(Blink::Hz1),
        "0.5hz" => Ok(Blink::HalfHz),
        _ => Err(format!("unknown blink rate '{spec}', use off, 2hz, 1hz or 0.5hz")),
    }
}

#[derive(Serialize)]
struct JsonExport<'a> {
    name: &'a str,
    rows: &'a [u16; ROWS],
}

/// Render `bitmap` in the named format. Every rendering ends with a newline.
pub fn render(
    bitmap: &Bitmap,
    style: &ExportStyle,
    format: &str,
    device: &DeviceSettings,
) -> Result<String> {
    match format {
        "c" => Ok(bitmap.to_c_array(style)),
        "hex" => Ok(bitmap.to_hex_array(style)),
        "json" => {
            let json = serde_json::to_string_pretty(&JsonExport {
                name: style.name(),
                rows: bitmap.rows(),
            })?;
            Ok(json + "\n")
        }
        "ht16k33" => Ok(render_ht16k33(bitmap, device)),
        _ => anyhow::bail!("unknown format '{}', use {}", format, FORMATS),
    }
}

/// I2C writes as hex byte lines: the init sequence, then the display write.
fn render_ht16k33(bitmap: &Bitmap, device: &DeviceSettings) -> String {
    let mut out = String::from("init:\n");
    for write in ht16k33::init_sequence(device.brightness, device.blink) {
        out.push_str(&format!("  {}\n", hex_bytes(&write)));
    }
    out.push_str("display:\n");
    let payload = ht16k33::write_display_payload(bitmap.rows());
    out.push_str(&format!("  {}\n", hex_bytes(&payload)));
    out
}

fn hex_bytes(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|b| format!("{b:02x}"))
        .collect::<Vec<_>>()
        .join(" ")
}
