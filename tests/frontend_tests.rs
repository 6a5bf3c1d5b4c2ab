use fieldplan::{
    passes::frontend::{dispatch::dispatch, operand::split_operand},
    resource::{
        errors::PlanErr,
        rep::{OpKind, Operation},
    },
};

#[test]
fn dispatch_read() {
    let op = dispatch("READ stmt:col rec:field").unwrap();
    assert_eq!(
        op,
        Operation::new(OpKind::Read, ("stmt", "col"), ("rec", "field"))
    );
}

#[test]
fn dispatch_write() {
    let op = dispatch("WRITE rec:field stmt:col").unwrap();
    assert_eq!(op.kind, OpKind::Write);
    assert_eq!(op.src, "rec");
    assert_eq!(op.dst_field, "col");
}

#[test]
fn bare_keyword_is_malformed() {
    let err = dispatch("READ").unwrap_err();
    assert!(matches!(err, PlanErr::MalformedCommand { ref command, .. } if command == "READ"));
}

#[test]
fn empty_command_is_malformed() {
    assert!(matches!(
        dispatch("").unwrap_err(),
        PlanErr::MalformedCommand { .. }
    ));
}

#[test]
fn wrong_arity_cites_syntax() {
    let read = dispatch("READ a:f").unwrap_err().to_string();
    assert!(read.contains("READ src:field dst:field"), "{read}");

    let write = dispatch("WRITE a:f b:f c:f").unwrap_err().to_string();
    assert!(write.contains("WRITE src:field dst:field"), "{write}");
}

#[test]
fn minimum_length_checked_before_keyword() {
    assert!(matches!(
        dispatch("FOO").unwrap_err(),
        PlanErr::MalformedCommand { .. }
    ));
    assert_eq!(
        dispatch("FOO a:f").unwrap_err(),
        PlanErr::UnknownCommand {
            keyword: "FOO".to_string()
        }
    );
}

#[test]
fn reserved_keywords_are_unknown() {
    for keyword in ["DECSTMT", "DECDAT"] {
        let err = dispatch(&format!("{keyword} a:f b:f")).unwrap_err();
        assert_eq!(
            err,
            PlanErr::UnknownCommand {
                keyword: keyword.to_string()
            }
        );
    }
}

#[test]
fn keywords_are_case_sensitive() {
    assert!(matches!(
        dispatch("read a:f b:f").unwrap_err(),
        PlanErr::UnknownCommand { .. }
    ));
}

#[test]
fn double_space_breaks_arity() {
    let err = dispatch("READ  a:f b:f").unwrap_err();
    assert!(matches!(err, PlanErr::MalformedCommand { .. }));
}

#[test]
fn operand_needs_exactly_one_colon() {
    assert_eq!(split_operand("name:field").unwrap(), ("name", "field"));
    assert_eq!(split_operand(":field").unwrap(), ("", "field"));
    for bad in ["name", "a:b:c", "name:", ":", ""] {
        assert_eq!(
            split_operand(bad).unwrap_err(),
            PlanErr::OperandFormat {
                operand: bad.to_string()
            },
            "{bad}"
        );
    }
}

#[test]
fn source_operand_error_wins() {
    let err = dispatch("WRITE bad also:bad:too").unwrap_err();
    assert_eq!(
        err,
        PlanErr::OperandFormat {
            operand: "bad".to_string()
        }
    );

    let err = dispatch("WRITE good:f bad").unwrap_err();
    assert_eq!(
        err,
        PlanErr::OperandFormat {
            operand: "bad".to_string()
        }
    );
}
