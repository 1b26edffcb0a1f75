use serde::{Deserialize, Serialize};
use serde_json::{Map, Value, json};

use crate::form::{FormData, parse_answer};

/// Field names the fixed contract reads, in payload order.
pub const FIXED_FIELDS: [&str; 4] = ["q1", "q2", "q3", "q4"];

/// How answers are extracted from the form and, by extension, what response
/// shape the server is expected to honor.
///
/// A handler is constructed with exactly one contract; the two are never mixed
/// within a submission.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Contract {
    /// Read a fixed set of named fields and send them as an ordered array
    /// under a single `personality` property. The server is expected to
    /// answer with a `redirect`; anything else is an unexpected format.
    Fixed { fields: Vec<String> },

    /// Enumerate every field present at submit time and send a name → integer
    /// mapping. A non-redirect response is a valid result payload to be
    /// stored for the result page. Extensible to any number of questions
    /// without code changes.
    Dynamic,
}

impl Contract {
    /// The fixed contract over the default `q1..q4` question set.
    pub fn fixed() -> Self {
        Contract::Fixed {
            fields: FIXED_FIELDS.iter().map(|f| f.to_string()).collect(),
        }
    }

    /// Serialize the form's answers per this contract. Unparseable values
    /// become JSON `null`; extraction never fails and never blocks the
    /// submission.
    pub fn build_payload(&self, form: &FormData) -> Value {
        match self {
            Contract::Fixed { fields } => {
                let answers: Vec<Value> = fields
                    .iter()
                    .map(|name| {
                        form.value(name)
                            .and_then(parse_answer)
                            .map_or(Value::Null, Value::from)
                    })
                    .collect();
                json!({ "personality": answers })
            }
            Contract::Dynamic => {
                let mut map = Map::new();
                for (name, raw) in form.iter() {
                    let parsed = parse_answer(raw).map_or(Value::Null, Value::from);
                    map.insert(name.to_string(), parsed);
                }
                Value::Object(map)
            }
        }
    }
}

impl Default for Contract {
    fn default() -> Self {
        Contract::Dynamic
    }
}
