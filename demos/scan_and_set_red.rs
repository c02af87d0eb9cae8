//! Scan the network for Govee lights and set them all to red.
//!
//! This example demonstrates:
//! - Brute-force discovery of Govee devices on the local /24 network
//! - Setting all discovered lights to red color
//!
//! Run with: cargo run --example scan_and_set_red

use govee_lan_rs::{DEFAULT_PORT, scan_network};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("Scanning the local network for Govee devices...");

    let result = scan_network(DEFAULT_PORT).await;
    if let Some(error) = result.error {
        eprintln!("Scan failed: {}", error);
        return Ok(());
    }

    if result.devices.is_empty() {
        println!("No devices found on the network.");
        return Ok(());
    }

    println!("Found {} device(s):", result.devices.len());
    for found in &result.devices {
        println!("  - IP: {}, Reply: {}", found.ip, found.response);
    }

    println!("\nSetting all lights to red...");

    // Turn each discovered light on and set it to red
    for found in result.devices {
        let device = found.into_device(None);
        device.turn_on().await;

        let result = device.set_color(255, 0, 0).await;
        if result.succeeded {
            println!("  ✓ Successfully set {} to red", device.ip());
        } else {
            eprintln!(
                "  ✗ Failed to set {} to red: {}",
                device.ip(),
                result.error.unwrap_or_default()
            );
        }
    }

    println!("\nDone!");
    Ok(())
}
