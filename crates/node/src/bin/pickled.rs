// Path: crates/node/src/bin/pickled.rs
#![forbid(unsafe_code)]

use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand};
use pickle_node::home::{read_genesis, NodeHome};
use pickle_node::runner::Runner;
use pickle_types::app::{
    DecisionResponse, PendingWorkResponse, RejectWorkParams, SubmitWorkParams,
    SubmitWorkResponse, Totals, ValidateWorkParams, ValidatorStatsQuery, ValidatorStatsResponse,
    WorkQuery, WorkQueueEvent, WorkRecord,
};
use pickle_types::codec;
use serde::Serialize;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[clap(name = "pickled", about = "Operator CLI for the Pickle work queue.")]
struct Cli {
    /// Node home directory.
    #[clap(long, env = "PICKLE_HOME", default_value = "./pickle-data")]
    home: PathBuf,
    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Create the home directory with a default config, genesis and database.
    Init,
    /// Import or export the whole-store snapshot.
    #[clap(subcommand)]
    Genesis(GenesisCommand),
    /// Execute one mutating call and commit it.
    #[clap(subcommand)]
    Tx(TxCommand),
    /// Read committed state.
    #[clap(subcommand)]
    Query(QueryCommand),
}

#[derive(Subcommand, Debug)]
enum GenesisCommand {
    /// Seed the store from a genesis file (defaults to <home>/genesis.json).
    Import {
        file: Option<PathBuf>,
        #[clap(long, default_value_t = 0)]
        height: u64,
    },
    /// Print the current snapshot as JSON.
    Export,
}

#[derive(Subcommand, Debug)]
enum TxCommand {
    /// Submit a work payload.
    SubmitWork {
        /// One of crypto, supply_chain, ml_data.
        work_type: String,
        /// The payload, taken as UTF-8 text unless --hex is set.
        data: String,
        /// Decode the payload as hex.
        #[clap(long)]
        hex: bool,
        /// Explicit record ID; generated from height and payload if omitted.
        #[clap(long)]
        id: Option<String>,
        #[clap(long)]
        height: u64,
    },
    /// Record a validator's judgement.
    ValidateWork {
        work_id: String,
        #[clap(action = clap::ArgAction::Set)]
        valid: bool,
        confidence: u32,
        #[clap(long)]
        validator: String,
        #[clap(long, default_value = "")]
        proof: String,
        #[clap(long)]
        height: u64,
    },
    /// Reject a work record.
    RejectWork {
        work_id: String,
        reason: String,
        #[clap(long)]
        validator: String,
        #[clap(long)]
        height: u64,
    },
}

#[derive(Subcommand, Debug)]
enum QueryCommand {
    /// Show one work record.
    Work { work_id: String },
    /// List pending work in key order.
    Pending,
    /// Show a validator's statistics.
    ValidatorStats { address: String },
    /// Show the aggregate totals.
    TotalStats,
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn print_events(events: &[WorkQueueEvent]) -> Result<()> {
    for event in events {
        println!("{}", serde_json::to_string(event)?);
    }
    Ok(())
}

fn encode<T: parity_scale_codec::Encode>(value: &T) -> Result<Vec<u8>> {
    codec::to_bytes_canonical(value).map_err(|e| anyhow!("failed to encode params: {e}"))
}

fn run_tx(runner: &mut Runner, command: TxCommand) -> Result<()> {
    match command {
        TxCommand::SubmitWork {
            work_type,
            data,
            hex,
            id,
            height,
        } => {
            let data = if hex {
                ::hex::decode(&data).context("payload is not valid hex")?
            } else {
                data.into_bytes()
            };
            let params = SubmitWorkParams {
                work_id: id.unwrap_or_default(),
                work_type,
                data,
            };
            let (response, events) = runner.call(height, "submit_work@v1", &encode(&params)?)?;
            let response: SubmitWorkResponse = codec::from_bytes_canonical(&response)
                .map_err(|e| anyhow!("malformed response: {e}"))?;
            print_events(&events)?;
            print_json(&response)
        }
        TxCommand::ValidateWork {
            work_id,
            valid,
            confidence,
            validator,
            proof,
            height,
        } => {
            let params = ValidateWorkParams {
                work_id,
                validator,
                valid,
                confidence,
                proof,
            };
            let (response, events) = runner.call(height, "validate_work@v1", &encode(&params)?)?;
            let response: DecisionResponse = codec::from_bytes_canonical(&response)
                .map_err(|e| anyhow!("malformed response: {e}"))?;
            print_events(&events)?;
            print_json(&response)
        }
        TxCommand::RejectWork {
            work_id,
            reason,
            validator,
            height,
        } => {
            let params = RejectWorkParams {
                work_id,
                validator,
                reason,
            };
            let (response, events) = runner.call(height, "reject_work@v1", &encode(&params)?)?;
            let response: DecisionResponse = codec::from_bytes_canonical(&response)
                .map_err(|e| anyhow!("malformed response: {e}"))?;
            print_events(&events)?;
            print_json(&response)
        }
    }
}

fn run_query(runner: &Runner, command: QueryCommand) -> Result<()> {
    match command {
        QueryCommand::Work { work_id } => {
            let record: WorkRecord = runner.query("work@v1", &encode(&WorkQuery { work_id })?)?;
            print_json(&record)
        }
        QueryCommand::Pending => {
            let pending: PendingWorkResponse = runner.query("pending_work@v1", &[])?;
            print_json(&pending.records)
        }
        QueryCommand::ValidatorStats { address } => {
            let stats: ValidatorStatsResponse =
                runner.query("validator_stats@v1", &encode(&ValidatorStatsQuery { address })?)?;
            print_json(&stats)
        }
        QueryCommand::TotalStats => {
            let totals: Totals = runner.query("total_stats@v1", &[])?;
            print_json(&totals)
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Command::Init = cli.command {
        let home = NodeHome::init(&cli.home)?;
        println!("Initialized Pickle home at {}", cli.home.display());
        println!("Database: {}", home.db_path().display());
        return Ok(());
    }

    let home = NodeHome::open(&cli.home)?;
    pickle_telemetry::init_tracing(home.config().log_format, &home.config().log_filter)?;
    let mut runner = Runner::new(home.open_store()?);

    match cli.command {
        Command::Init => Ok(()),
        Command::Genesis(GenesisCommand::Import { file, height }) => {
            let path = file.unwrap_or_else(|| home.genesis_path());
            let genesis = read_genesis(&path)?;
            let events = runner.import_genesis(height, genesis)?;
            print_events(&events)?;
            log::info!("imported genesis from {}", path.display());
            Ok(())
        }
        Command::Genesis(GenesisCommand::Export) => print_json(&runner.export_genesis()?),
        Command::Tx(tx) => run_tx(&mut runner, tx),
        Command::Query(query) => run_query(&runner, query),
    }
}
