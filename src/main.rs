#![deny(
    warnings,
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    clippy::cargo
)]
#![allow(clippy::multiple_crate_versions)]

use anyhow::Result;
use clap::Parser;
use redek::{cli, packet, types::Packet, utils};

#[macro_use]
extern crate redek;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    utils::init_logging(cli.verbose, cli.quiet);

    let packets = match cli.packets {
        Some(path) => utils::load_packets(&path)?,
        None => demo_packets(),
    };
    dlog!("mode=print packets={}", packets.len());

    let mut rendered = 0usize;
    for (i, p) in packets.iter().enumerate() {
        match packet::decode(p) {
            Ok(training) => {
                println!("{}", training.summary().render());
                rendered += 1;
            }
            Err(e) => {
                tracing::warn!(index = i, code = %p.code, err = %e, "skipping packet");
            }
        }
    }

    if rendered == 0 {
        anyhow::bail!("No packets rendered. Check that the input is a tracker packet dump.");
    }
    dlog!("rendered={rendered}");

    Ok(())
}

/// The reference sensor dataset, used when no packet file is given.
fn demo_packets() -> Vec<Packet> {
    vec![
        Packet {
            code: "SWM".to_string(),
            values: vec![720.0, 1.0, 80.0, 25.0, 40.0],
        },
        Packet {
            code: "RUN".to_string(),
            values: vec![15_000.0, 1.0, 75.0],
        },
        Packet {
            code: "WLK".to_string(),
            values: vec![9_000.0, 1.0, 75.0, 180.0],
        },
    ]
}
