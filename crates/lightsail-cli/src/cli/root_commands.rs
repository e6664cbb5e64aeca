use std::path::PathBuf;

use clap::{Args, Subcommand};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Inspect enumerations and their wire values.
    Enums {
        #[command(subcommand)]
        action: EnumsCommands,
    },
    /// List API actions and their `X-Amz-Target` values.
    Actions(ActionsArgs),
    /// Print the JSON Schema of an action's request (or result).
    Schema(SchemaArgs),
    /// Validate a JSON request and print the envelope that would be sent.
    Encode(EncodeArgs),
    /// Decode a response body into the action's typed result.
    Decode(DecodeArgs),
    /// Decode a service error body.
    DecodeError(DecodeErrorArgs),
}

#[derive(Clone, Debug, Subcommand)]
pub enum EnumsCommands {
    /// List every enumeration with its number of values.
    List,
    /// Show the declared wire values of one enumeration.
    Show {
        /// Enumeration name, e.g. `PortAccessType`.
        name: String,
    },
    /// Look up a wire value in one enumeration.
    Parse {
        /// Enumeration name, e.g. `PortAccessType`.
        name: String,
        /// Wire value to look up (exact, case-sensitive).
        value: String,
    },
}

#[derive(Clone, Debug, Args)]
pub struct ActionsArgs {
    /// Only list actions with typed request shapes.
    #[arg(long)]
    pub modeled: bool,
}

#[derive(Clone, Debug, Args)]
pub struct SchemaArgs {
    /// Action name, e.g. `PutAlarm`.
    pub action: String,

    /// Print the result schema instead of the request schema.
    #[arg(long)]
    pub response: bool,
}

#[derive(Clone, Debug, Args)]
pub struct EncodeArgs {
    /// Action name, e.g. `PutAlarm`.
    pub action: String,

    /// JSON request file (reads stdin when omitted or `-`).
    #[arg(short, long)]
    pub input: Option<PathBuf>,
}

#[derive(Clone, Debug, Args)]
pub struct DecodeArgs {
    /// Action name, e.g. `GetAlarms`.
    pub action: String,

    /// HTTP status the body was returned with.
    #[arg(long, default_value_t = 200)]
    pub status: u16,

    /// Response body file (reads stdin when omitted or `-`).
    #[arg(short, long)]
    pub input: Option<PathBuf>,
}

#[derive(Clone, Debug, Args)]
pub struct DecodeErrorArgs {
    /// HTTP status the body was returned with.
    #[arg(long, default_value_t = 400)]
    pub status: u16,

    /// Error body file (reads stdin when omitted or `-`).
    #[arg(short, long)]
    pub input: Option<PathBuf>,
}
