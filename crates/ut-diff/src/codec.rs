//! Storable encoding of edit scripts.
//!
//! Scripts are stored on history nodes as JSON arrays of op objects tagged
//! by `"op"`:
//!
//! ```json
//! [{"op":"keep","pos":0,"len":2},{"op":"add","pos":2,"content":"X"}]
//! ```

use crate::error::{DiffError, DiffResult};
use crate::script::EditScript;

/// Encode a script for storage.
pub fn serialize(script: &EditScript) -> DiffResult<String> {
    serde_json::to_string(script).map_err(|e| DiffError::Serialization(e.to_string()))
}

/// Decode a stored script.
pub fn deserialize(encoded: &str) -> DiffResult<EditScript> {
    serde_json::from_str(encoded).map_err(|e| DiffError::MalformedScript(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::diff;
    use crate::script::EditOp;
    use proptest::prelude::*;

    #[test]
    fn wire_format_is_tagged_json() {
        let script = EditScript::from(vec![
            EditOp::Keep { pos: 0, len: 2 },
            EditOp::Remove { pos: 2, len: 1 },
            EditOp::Add {
                pos: 2,
                content: "X".into(),
            },
        ]);
        assert_eq!(
            serialize(&script).unwrap(),
            r#"[{"op":"keep","pos":0,"len":2},{"op":"remove","pos":2,"len":1},{"op":"add","pos":2,"content":"X"}]"#
        );
    }

    #[test]
    fn empty_script_encodes_as_empty_array() {
        assert_eq!(serialize(&EditScript::new()).unwrap(), "[]");
        assert!(deserialize("[]").unwrap().is_empty());
    }

    #[test]
    fn decodes_stored_script() {
        let decoded = deserialize(r#"[{"op":"add","pos":0,"content":"a\"b\n"}]"#).unwrap();
        assert_eq!(
            decoded.into_ops(),
            vec![EditOp::Add {
                pos: 0,
                content: "a\"b\n".into()
            }]
        );
    }

    #[test]
    fn garbage_is_malformed() {
        assert!(matches!(
            deserialize("not json"),
            Err(DiffError::MalformedScript(_))
        ));
    }

    #[test]
    fn unknown_op_is_malformed() {
        assert!(matches!(
            deserialize(r#"[{"op":"swap","pos":0,"len":1}]"#),
            Err(DiffError::MalformedScript(_))
        ));
    }

    #[test]
    fn missing_field_is_malformed() {
        assert!(matches!(
            deserialize(r#"[{"op":"keep","pos":0}]"#),
            Err(DiffError::MalformedScript(_))
        ));
    }

    proptest! {
        #[test]
        fn diffed_scripts_survive_encoding(a in any::<String>(), b in any::<String>()) {
            let script = diff(&a, &b);
            let decoded = deserialize(&serialize(&script).unwrap()).unwrap();
            prop_assert_eq!(decoded, script);
        }
    }
}
