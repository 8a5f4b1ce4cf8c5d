//! Walks the log lines of one instruction and decodes every Fare event
//! payload found in them.
//!
//! Anchor's `emit!` writes `Program data: <base64>`; some program builds log
//! events as `Program log: 0x<hex>` instead. A payload that cannot be decoded
//! is counted and skipped, it never aborts the rest of the batch.

use base64::{Engine as _, engine::general_purpose};
use serde::{Deserialize, Serialize};

use crate::discriminator::{DISCRIMINATOR_LEN, identify_event_type};
use crate::error::Error;
use crate::events::{TypedEvent, decode_event};
use crate::types::{EventContext, TransactionLogs};

const PROGRAM_DATA_PREFIX: &str = "Program data: ";
const PROGRAM_LOG_PREFIX: &str = "Program log: ";
const HEX_PAYLOAD_PREFIX: &str = "0x";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ScannerConfig {
    /// Only decode payloads emitted while this program is executing.
    /// `None` accepts payloads from any program.
    pub program_id: Option<String>,
    /// Also treat `Program log: 0x<hex>` lines as payloads.
    pub accept_hex_payloads: bool,
}

impl Default for ScannerConfig {
    fn default() -> Self {
        Self {
            program_id: None,
            accept_hex_payloads: true,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SkipCounts {
    pub unknown_discriminator: usize,
    pub malformed: usize,
}

impl SkipCounts {
    pub fn total(&self) -> usize {
        self.unknown_discriminator + self.malformed
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedLogs {
    /// Decoded events in the order their payloads appeared.
    pub events: Vec<TypedEvent>,
    pub skipped: SkipCounts,
}

impl ParsedLogs {
    pub fn into_events(self) -> Vec<TypedEvent> {
        self.events
    }
}

enum Payload<'a> {
    Base64(&'a str),
    Hex(&'a str),
}

impl Payload<'_> {
    fn decode(&self) -> Result<Vec<u8>, Error> {
        match self {
            Self::Base64(body) => {
                general_purpose::STANDARD
                    .decode(body)
                    .map_err(|e| Error::InvalidEncoding {
                        reason: format!("base64: {e}"),
                    })
            }
            Self::Hex(body) => hex::decode(body).map_err(|e| Error::InvalidEncoding {
                reason: format!("hex: {e}"),
            }),
        }
    }
}

fn payload_candidate<'a>(line: &'a str, config: &ScannerConfig) -> Option<Payload<'a>> {
    if let Some(body) = line.strip_prefix(PROGRAM_DATA_PREFIX) {
        return Some(Payload::Base64(body.trim()));
    }
    if config.accept_hex_payloads
        && let Some(body) = line.strip_prefix(PROGRAM_LOG_PREFIX)
        && let Some(hex_body) = body.trim().strip_prefix(HEX_PAYLOAD_PREFIX)
    {
        return Some(Payload::Hex(hex_body));
    }
    None
}

/// Program ids currently executing, innermost last, rebuilt from
/// `Program <id> invoke [n]` and `Program <id> success|failed` lines.
#[derive(Default)]
struct InvocationStack<'a> {
    programs: Vec<&'a str>,
}

impl<'a> InvocationStack<'a> {
    fn observe(&mut self, line: &'a str) {
        let Some(rest) = line.strip_prefix("Program ") else {
            return;
        };
        let Some((program, tail)) = rest.split_once(' ') else {
            return;
        };
        if program.ends_with(':') {
            return;
        }
        if tail.starts_with("invoke [") {
            self.programs.push(program);
        } else if (tail == "success" || tail.starts_with("failed"))
            && self.programs.last() == Some(&program)
        {
            self.programs.pop();
        }
    }

    fn current(&self) -> Option<&'a str> {
        self.programs.last().copied()
    }
}

pub struct LogScanner<'c> {
    config: &'c ScannerConfig,
}

impl<'c> LogScanner<'c> {
    pub fn new(config: &'c ScannerConfig) -> Self {
        Self { config }
    }

    pub fn scan<S: AsRef<str>>(
        &self,
        logs: &[S],
        signature: &str,
        slot: u64,
        block_time: Option<i64>,
        instruction_index: u32,
    ) -> ParsedLogs {
        let mut parsed = ParsedLogs::default();
        let mut stack = InvocationStack::default();

        for line in logs {
            let line = line.as_ref().trim_start();
            stack.observe(line);

            let Some(candidate) = payload_candidate(line, self.config) else {
                continue;
            };
            if let Some(expected) = self.config.program_id.as_deref()
                && stack.current() != Some(expected)
            {
                tracing::trace!(signature, current = ?stack.current(), "payload outside filtered program");
                continue;
            }

            let bytes = match candidate.decode() {
                Ok(bytes) => bytes,
                Err(err) => {
                    tracing::warn!(signature, slot, %err, "undecodable event payload");
                    parsed.skipped.malformed += 1;
                    continue;
                }
            };
            let Some((discriminator, data)) = bytes.split_first_chunk::<DISCRIMINATOR_LEN>() else {
                tracing::warn!(signature, slot, len = bytes.len(), "payload shorter than discriminator");
                parsed.skipped.malformed += 1;
                continue;
            };
            let Some(kind) = identify_event_type(discriminator) else {
                tracing::trace!(signature, discriminator = ?discriminator, "unknown discriminator");
                parsed.skipped.unknown_discriminator += 1;
                continue;
            };

            let context = EventContext {
                slot,
                instruction_index,
                inner_instruction_index: u32::try_from(parsed.events.len()).unwrap_or(u32::MAX),
                signature: signature.to_string(),
                block_time,
            };
            match decode_event(kind, data, context) {
                Ok(event) => {
                    tracing::debug!(
                        signature,
                        slot,
                        %kind,
                        inner_instruction_index = event.context().inner_instruction_index,
                        "decoded fare event"
                    );
                    parsed.events.push(event);
                }
                Err(err) if err.is_payload_error() => {
                    tracing::warn!(signature, slot, %kind, %err, "skipping malformed event payload");
                    parsed.skipped.malformed += 1;
                }
                Err(err) => {
                    tracing::error!(signature, slot, %kind, %err, "event payload failed to decode");
                    parsed.skipped.malformed += 1;
                }
            }
        }

        parsed
    }
}

/// Decodes every recognised Fare event in one instruction's logs, accepting
/// payloads from any program.
pub fn parse_transaction_logs<S: AsRef<str>>(
    logs: &[S],
    signature: &str,
    slot: u64,
    block_time: Option<i64>,
    instruction_index: u32,
) -> ParsedLogs {
    LogScanner::new(&ScannerConfig::default()).scan(
        logs,
        signature,
        slot,
        block_time,
        instruction_index,
    )
}

pub fn parse_transaction(batch: &TransactionLogs, config: &ScannerConfig) -> ParsedLogs {
    LogScanner::new(config).scan(
        &batch.logs,
        &batch.signature,
        batch.slot,
        batch.block_time,
        batch.instruction_index,
    )
}
