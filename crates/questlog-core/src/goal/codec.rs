//! Line codec for goals.
//!
//! Each goal persists as one `|`-delimited text line, dispatched on a type
//! tag in the first field:
//!
//! ```text
//! SimpleGoal|<name>|<description>|<basePoints>|<complete>
//! EternalGoal|<name>|<description>|<basePoints>|<complete>
//! ChecklistGoal|<name>|<description>|<basePoints>|<complete>|<currentCount>|<targetCount>|<bonusPoints>
//! ```
//!
//! Booleans serialize as the literal tokens `True`/`False`; the decoder
//! also accepts lowercase. No escaping is performed: a name or description
//! containing `|` corrupts the record on the next decode. That is an
//! accepted limitation of the format, not something this codec papers over.
//!
//! [`decode`] is the restore path for goals: it is the only way to rebuild
//! a goal with arbitrary completion state and progress counters.

use crate::error::CodecError;
use crate::goal::Goal;

/// Field delimiter for goal lines and the profile header.
pub const DELIMITER: char = '|';

fn encode_bool(value: bool) -> &'static str {
    if value {
        "True"
    } else {
        "False"
    }
}

fn parse_bool(field: &'static str, value: &str) -> Result<bool, CodecError> {
    if value.eq_ignore_ascii_case("true") {
        Ok(true)
    } else if value.eq_ignore_ascii_case("false") {
        Ok(false)
    } else {
        Err(CodecError::InvalidBool {
            field,
            value: value.to_string(),
        })
    }
}

fn parse_i64(field: &'static str, value: &str) -> Result<i64, CodecError> {
    value.trim().parse().map_err(|_| CodecError::InvalidNumber {
        field,
        value: value.to_string(),
    })
}

fn parse_u32(field: &'static str, value: &str) -> Result<u32, CodecError> {
    value.trim().parse().map_err(|_| CodecError::InvalidNumber {
        field,
        value: value.to_string(),
    })
}

/// Encode a goal as one text line (no trailing newline).
pub fn encode(goal: &Goal) -> String {
    match goal {
        Goal::Simple {
            name,
            description,
            base_points,
            complete,
        } => format!(
            "SimpleGoal|{name}|{description}|{base_points}|{}",
            encode_bool(*complete)
        ),
        Goal::Eternal {
            name,
            description,
            base_points,
            complete,
        } => format!(
            "EternalGoal|{name}|{description}|{base_points}|{}",
            encode_bool(*complete)
        ),
        Goal::Checklist {
            name,
            description,
            base_points,
            complete,
            current_count,
            target_count,
            bonus_points,
        } => format!(
            "ChecklistGoal|{name}|{description}|{base_points}|{}|{current_count}|{target_count}|{bonus_points}",
            encode_bool(*complete)
        ),
    }
}

/// Decode one text line back into a goal.
///
/// All fields, including completion state and checklist counters, are
/// reconstructed exactly as encoded; nothing is normalized or re-derived.
pub fn decode(line: &str) -> Result<Goal, CodecError> {
    let parts: Vec<&str> = line.split(DELIMITER).collect();
    // split() yields at least one element, so parts[0] always exists.
    let tag = parts[0];
    match tag {
        "SimpleGoal" => {
            let (name, description, base_points, complete) =
                base_fields(&parts, "SimpleGoal")?;
            Ok(Goal::Simple {
                name,
                description,
                base_points,
                complete,
            })
        }
        "EternalGoal" => {
            let (name, description, base_points, complete) =
                base_fields(&parts, "EternalGoal")?;
            Ok(Goal::Eternal {
                name,
                description,
                base_points,
                complete,
            })
        }
        "ChecklistGoal" => {
            if parts.len() < 8 {
                return Err(CodecError::TooFewFields {
                    tag: "ChecklistGoal",
                    expected: 8,
                    got: parts.len(),
                });
            }
            let (name, description, base_points, complete) =
                base_fields(&parts, "ChecklistGoal")?;
            Ok(Goal::Checklist {
                name,
                description,
                base_points,
                complete,
                current_count: parse_u32("currentCount", parts[5])?,
                target_count: parse_u32("targetCount", parts[6])?,
                bonus_points: parse_i64("bonusPoints", parts[7])?,
            })
        }
        other => Err(CodecError::UnknownTag(other.to_string())),
    }
}

/// Fields common to all shapes: name, description, basePoints, complete.
fn base_fields(
    parts: &[&str],
    tag: &'static str,
) -> Result<(String, String, i64, bool), CodecError> {
    if parts.len() < 5 {
        return Err(CodecError::TooFewFields {
            tag,
            expected: 5,
            got: parts.len(),
        });
    }
    Ok((
        parts[1].to_string(),
        parts[2].to_string(),
        parse_i64("basePoints", parts[3])?,
        parse_bool("complete", parts[4])?,
    ))
}
