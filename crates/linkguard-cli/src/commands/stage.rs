//! Stage command implementation.
//!
//! Reads a file in chunks into a `BoundedBuffer<u8>` and drains it in
//! fixed-size frames, printing the CRC of each. Each chunk is appended as far
//! as it fits; frames are drained as soon as they are complete.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::Args;
use linkguard::{BoundedBuffer, CrcParameters, take_checked};
use linkguard_config::LinkguardConfig;

use super::checksum::CrcArgs;
use crate::style::{SemanticStyle, print_field};

#[derive(Args)]
pub struct StageArgs {
    /// File to stage.
    pub path: PathBuf,

    /// Frame size in bytes.
    #[arg(short, long)]
    pub frame: usize,

    /// Buffer capacity (default: buffer.capacity from config).
    #[arg(long)]
    pub capacity: Option<usize>,

    /// Read chunk size (default: buffer.chunk_size from config).
    #[arg(long)]
    pub chunk: Option<usize>,

    #[command(flatten)]
    pub crc: CrcArgs,
}

/// Running totals for one staging pass.
#[derive(Debug, Default)]
struct Progress {
    frames: usize,
    bytes: usize,
}

pub fn run(args: &StageArgs, config: &LinkguardConfig) -> Result<()> {
    let capacity = args.capacity.unwrap_or(config.buffer.capacity);
    let chunk_size = args.chunk.unwrap_or(config.buffer.chunk_size);
    let params = args.crc.resolve(config);

    if args.frame == 0 {
        bail!("--frame must be at least 1");
    }
    if chunk_size == 0 {
        bail!("chunk size must be at least 1");
    }
    if args.frame > capacity {
        bail!(
            "frame size {} exceeds buffer capacity {capacity}",
            args.frame
        );
    }

    let buffer = BoundedBuffer::new(capacity)?;
    let file =
        File::open(&args.path).with_context(|| format!("Failed to open {}", args.path.display()))?;
    let mut reader = BufReader::new(file);
    let mut chunk = vec![0u8; chunk_size];
    let mut progress = Progress::default();

    tracing::info!(
        path = %args.path.display(),
        capacity,
        chunk_size,
        frame = args.frame,
        "staging file"
    );

    loop {
        let n = reader
            .read(&mut chunk)
            .with_context(|| format!("Failed to read {}", args.path.display()))?;
        if n == 0 {
            break;
        }

        let mut pending = &chunk[..n];
        while !pending.is_empty() {
            let taken = buffer.add_up_to(pending);
            pending = &pending[taken..];
            drain_frames(&buffer, args.frame, &params, &mut progress)?;
        }
    }

    let remainder = buffer.count();
    if remainder > 0 {
        let (_, crc) = take_checked(&buffer, remainder, &params)?;
        println!(
            "{}",
            format!(
                "partial {:>5}  offset {:>8}  len {remainder:>5}  crc {crc:#06X}",
                progress.frames, progress.bytes
            )
            .warning()
        );
        progress.bytes += remainder;
    }

    println!();
    print_field("Frames", progress.frames);
    print_field("Bytes", progress.bytes);
    if remainder > 0 {
        print_field("Trailing", format_args!("{remainder} bytes"));
    }

    Ok(())
}

/// Drains every complete frame currently staged.
fn drain_frames(
    buffer: &BoundedBuffer<u8>,
    frame: usize,
    params: &CrcParameters,
    progress: &mut Progress,
) -> Result<()> {
    while buffer.has_data_at_least(frame) {
        let (_, crc) = take_checked(buffer, frame, params)?;
        println!(
            "frame   {:>5}  offset {:>8}  len {frame:>5}  crc {crc:#06X}",
            progress.frames, progress.bytes
        );
        progress.frames += 1;
        progress.bytes += frame;
    }
    Ok(())
}
