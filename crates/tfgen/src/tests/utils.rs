use crate::Cli;
use crate::CommandResult;
use clap::Parser;
use std::path::PathBuf;

pub const DEVICE_QUERY: &str = "\
query device($device_name: String!) {
  InfraDevice(name__value: $device_name) {
    edges {
      node {
        id
        name {
          value
        }
      }
    }
  }
}
";

pub const DEVICE_LIST_QUERY: &str = "\
query DeviceList {
  InfraDevice {
    edges {
      node {
        id
      }
    }
  }
}
";

/// A fresh, empty directory unique to `name` and this test process.
pub fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir()
        .join(format!("tfgen-{}-{name}", std::process::id()));
    let _ = std::fs::remove_dir_all(&dir);
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

/// Parses `args` as a command line and runs the selected command.
pub async fn run_cli(args: &[&str]) -> CommandResult {
    let mut cli = Cli::try_parse_from(
        std::iter::once("tfgen").chain(args.iter().copied()),
    ).unwrap();
    let command = cli.cmd.take().unwrap();
    command.run(cli).await
}
