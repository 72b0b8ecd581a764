use std::{
    env,
    io::{self, Write},
    process::ExitCode,
};

use log::{error, info};
use virtual_exfat::{MB, mount};

/// Bytes copied to stdout per read.
const CHUNK_BYTES: u64 = 4 * MB as u64;

fn main() -> ExitCode {
    env_logger::init();

    let mut args = env::args().skip(1);
    let (Some(path), Some(capacity), None) = (args.next(), args.next(), args.next()) else {
        eprintln!("usage: virtual-exfat <host-file> <capacity-bytes>");
        return ExitCode::FAILURE;
    };

    let Ok(capacity) = capacity.parse::<u64>() else {
        eprintln!("invalid capacity: {capacity}");
        return ExitCode::FAILURE;
    };

    let device = match mount(&path, capacity) {
        Ok(device) => device,
        Err(err) => {
            error!("{err}");
            eprintln!("{err}");
            return ExitCode::FAILURE;
        }
    };

    let sector_size = device.sector_size() as u64;
    let sectors_per_chunk = CHUNK_BYTES / sector_size;
    let capacity = device.capacity_sectors();

    let mut stdout = io::stdout().lock();
    let mut lba = 0;
    while lba < capacity {
        // bounded by sectors_per_chunk
        let count = sectors_per_chunk.min(capacity - lba) as u32;

        let result = device
            .read(lba, count)
            .map_err(|err| err.to_string())
            .and_then(|bytes| stdout.write_all(&bytes).map_err(|err| err.to_string()));

        if let Err(err) = result {
            error!("failed at sector {lba}: {err}");
            return ExitCode::FAILURE;
        }

        lba += count as u64;
    }

    info!("wrote {capacity} sectors");
    ExitCode::SUCCESS
}
