// DUCO Miner - Free and Open Source Software Statement
//
// This project, duco-miner, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/pool/messages.rs
// Version: 1.0.0
// Developer: OIEIEIO <oieieio@protonmail.com>
//
// This file classifies the pool's reply to a share submission, located in the
// pool subdirectory.
//
// Tree Location:
// - src/pool/messages.rs (share feedback)
// - Depends on: crate::core::types

use crate::core::types::ShareKind;

/// Pool verdict on a submitted share
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Feedback {
    Good,
    Bad(String),
    Block,
    /// Anything unrecognised, kept verbatim
    Unknown(String),
}

impl Feedback {
    /// Classify a feedback line. Total: every input, including a missing line,
    /// maps to exactly one variant.
    pub fn parse(line: Option<&str>) -> Feedback {
        let Some(raw) = line else {
            return Feedback::Unknown(String::new());
        };
        let trimmed = raw.trim();
        if trimmed == "GOOD" {
            Feedback::Good
        } else if trimmed == "BLOCK" {
            Feedback::Block
        } else if let Some(reason) = trimmed.strip_prefix("BAD,") {
            Feedback::Bad(reason.to_string())
        } else {
            Feedback::Unknown(raw.to_string())
        }
    }

    /// Counter this feedback increments, if any
    pub fn share_kind(&self) -> Option<ShareKind> {
        match self {
            Feedback::Good => Some(ShareKind::Good),
            Feedback::Bad(_) => Some(ShareKind::Bad),
            Feedback::Block => Some(ShareKind::Block),
            Feedback::Unknown(_) => None,
        }
    }
}


// Changelog:
// - v1.0.0 (2026-10-17): Replaced JSON pool message parsing with line feedback classification.
