use std::path::PathBuf;
use structopt::StructOpt;

use prontoblast_shared::{DeviceModel, SignalEncoder};

mod encode;
mod inspect;
mod vcdutils;

#[derive(Debug, StructOpt)]
#[structopt(name = "prontoblast", about = "Pronto Hex to Chuangmi IR code tool")]
struct Opt {
    #[structopt(short, long)]
    debug: bool,
    /// Device model: ir, remote or a miio model id
    #[structopt(long, default_value = "chuangmi.ir.v2")]
    model: DeviceModel,
    #[structopt(subcommand)]
    cmd: CliCommand,
}

#[derive(StructOpt, Debug)]
enum CliCommand {
    /// Encode a Pronto Hex code for the device
    Encode {
        pronto: String,
        /// Number of extra repeats of the repeated part
        #[structopt(short, long, default_value = "1", allow_hyphen_values = true)]
        repeats: i64,
        #[structopt(long)]
        json: bool,
    },
    /// Show the burst pairs of a Pronto Hex code
    Parse {
        pronto: String,
        #[structopt(long)]
        json: bool,
    },
    /// Print the ir_play parameters for raw:<code>[:freq] or pronto:<hex>[:repeats]
    Play { command: String },
    /// Decode a learned code. Optionally write its waveform to a vcd file
    Inspect {
        code: String,
        #[structopt(long, parse(from_os_str))]
        vcd: Option<PathBuf>,
    },
}

fn main() -> anyhow::Result<()> {
    let opt = Opt::from_args();

    let mut builder = env_logger::Builder::from_default_env();
    if opt.debug {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.init();

    match opt.cmd {
        CliCommand::Encode {
            pronto,
            repeats,
            json,
        } => {
            let encoder = SignalEncoder::new(opt.model)?;
            encode::command_encode(&encoder, &pronto, repeats, json)
        }
        CliCommand::Parse { pronto, json } => encode::command_parse(&pronto, json),
        CliCommand::Play { command } => {
            let encoder = SignalEncoder::new(opt.model)?;
            encode::command_play(&encoder, &command)
        }
        CliCommand::Inspect { code, vcd } => {
            let encoder = SignalEncoder::new(opt.model)?;
            inspect::command_inspect(&encoder, &code, vcd)
        }
    }
}
