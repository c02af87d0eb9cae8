//! CLI application for controlling Govee lights.
//!
//! This example demonstrates a full-featured command-line interface for
//! controlling Govee lights using various commands.
//!
//! Run with: cargo run --example govee_cli -- --help

use clap::{Parser, Subcommand};
use std::net::Ipv4Addr;

use govee_lan_rs::{DEFAULT_PORT, Device, DeviceConfig, DeviceStatus, scan_network};

#[derive(Parser)]
#[command(name = "govee-cli")]
#[command(about = "Control Govee smart lights from the command line", long_about = None)]
struct Cli {
    /// IP address of the Govee device (not required for the scan command)
    #[arg(short, long, global = true)]
    ip: Option<Ipv4Addr>,

    /// UDP port the device listens on
    #[arg(short, long, global = true, default_value_t = DEFAULT_PORT)]
    port: u16,

    /// Send/receive timeout in seconds
    #[arg(short, long, global = true, default_value = "5")]
    timeout: u64,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Scan the local /24 network for Govee devices
    Scan,

    /// Get the current status of the device
    Status,

    /// Turn the device on
    On,

    /// Turn the device off
    Off,

    /// Toggle the device on/off
    Toggle,

    /// Set RGB color (out-of-range components are clamped to 0-255)
    Color {
        /// Red component
        red: i64,
        /// Green component
        green: i64,
        /// Blue component
        blue: i64,
    },

    /// Set brightness (out-of-range levels are clamped to 0-100)
    Brightness {
        /// Brightness level
        level: i64,
    },

    /// Set color temperature in Kelvin (clamped to 2000-9000)
    Temperature {
        /// Temperature in Kelvin
        kelvin: i64,
    },

    /// Send a raw JSON command envelope, e.g.
    /// '{"msg":{"cmd":"turn","data":{"value":1}}}'
    Raw {
        /// The full JSON envelope to send
        json: String,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    if matches!(cli.command, Commands::Scan) {
        println!("Scanning the local network for Govee devices...");

        let result = scan_network(cli.port).await;
        if let Some(error) = result.error {
            eprintln!("Scan failed: {}", error);
            return Ok(());
        }

        if result.devices.is_empty() {
            println!("No devices found on the network.");
        } else {
            println!("\nFound {} device(s):", result.devices.len());
            for found in result.devices {
                println!("  IP: {:15}  Reply: {}", found.ip.to_string(), found.response);
            }
        }
        return Ok(());
    }

    let ip = cli
        .ip
        .ok_or("--ip is required for every command except scan")?;
    let config = DeviceConfig {
        device_ip: ip,
        device_port: cli.port,
        timeout_secs: cli.timeout,
        ..DeviceConfig::default()
    };
    let device = Device::new(config, None);

    let result = match cli.command {
        Commands::Status => {
            let result = device.status().await;
            match result.response.as_deref() {
                Some(reply) => {
                    println!("Raw reply: {}", reply);
                    if let Ok(status) = DeviceStatus::parse(reply) {
                        println!("Power:      {}", if status.is_on() { "on" } else { "off" });
                        if let Some(level) = status.brightness {
                            println!("Brightness: {}%", level);
                        }
                        if let Some(color) = &status.color {
                            println!(
                                "Color:      {},{},{}",
                                color.red(),
                                color.green(),
                                color.blue()
                            );
                        }
                        if let Some(temp) = status.color_tem_in_kelvin {
                            println!("Temp:       {}K", temp);
                        }
                    }
                }
                None => println!("The device did not answer the status query."),
            }
            result
        }
        Commands::On => device.turn_on().await,
        Commands::Off => device.turn_off().await,
        Commands::Toggle => device.toggle().await,
        Commands::Color { red, green, blue } => device.set_color(red, green, blue).await,
        Commands::Brightness { level } => device.set_brightness(level).await,
        Commands::Temperature { kelvin } => device.set_color_temp(kelvin).await,
        Commands::Raw { json } => device.send_raw(serde_json::from_str(&json)?).await,
        Commands::Scan => unreachable!(),
    };

    if result.succeeded {
        println!("✓ Command sent ({} bytes)", result.bytes_sent);
    } else {
        eprintln!(
            "✗ Command failed: {}",
            result.error.unwrap_or_else(|| "unknown error".into())
        );
    }

    Ok(())
}
