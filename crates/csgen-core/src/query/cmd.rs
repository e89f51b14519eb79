use serde::{Serialize, Serializer};
use std::fmt;

/// The command annotation of a query (`-- name: GetAuthor :one`).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Cmd {
    Exec,
    ExecResult,
    ExecRows,
    ExecLastId,
    One,
    Many,
    BatchExec,
    BatchMany,
    BatchOne,
    CopyFrom,

    /// A tag this generator has no dedicated handling for, kept verbatim.
    Other(Box<str>),
}

impl Cmd {
    /// Parses a command tag. Returns `None` only for an empty tag.
    pub fn parse(tag: &str) -> Option<Cmd> {
        Some(match tag {
            ":exec" => Cmd::Exec,
            ":execresult" => Cmd::ExecResult,
            ":execrows" => Cmd::ExecRows,
            ":execlastid" => Cmd::ExecLastId,
            ":one" => Cmd::One,
            ":many" => Cmd::Many,
            ":batchexec" => Cmd::BatchExec,
            ":batchmany" => Cmd::BatchMany,
            ":batchone" => Cmd::BatchOne,
            ":copyfrom" => Cmd::CopyFrom,
            "" => return None,
            other => Cmd::Other(other.into()),
        })
    }

    pub fn as_str(&self) -> &str {
        match self {
            Cmd::Exec => ":exec",
            Cmd::ExecResult => ":execresult",
            Cmd::ExecRows => ":execrows",
            Cmd::ExecLastId => ":execlastid",
            Cmd::One => ":one",
            Cmd::Many => ":many",
            Cmd::BatchExec => ":batchexec",
            Cmd::BatchMany => ":batchmany",
            Cmd::BatchOne => ":batchone",
            Cmd::CopyFrom => ":copyfrom",
            Cmd::Other(tag) => tag,
        }
    }
}

impl Serialize for Cmd {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl fmt::Display for Cmd {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
