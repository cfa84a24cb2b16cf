#![cfg(feature = "serde")]

use anyhow::Result;
use jsyn::{parse_source, tokenize};
use serde_json::json;

#[test]
fn serialize_tokens() -> Result<()> {
    let tokens = tokenize("import * as a from 'm'; b << 1")?;
    let value = serde_json::to_value(&tokens)?;

    assert_eq!(
        value,
        json!([
            { "kind": "Import", "text": "import", "start": 0, "end": 6 },
            { "kind": "Asterisk", "text": "*", "start": 7, "end": 8 },
            { "kind": "As", "text": "as", "start": 9, "end": 11 },
            { "kind": "Identifier", "text": "a", "start": 12, "end": 13 },
            { "kind": "From", "text": "from", "start": 14, "end": 18 },
            { "kind": "StringLiteral", "text": "m", "start": 19, "end": 22, "rawText": "'m'" },
            { "kind": "Semicolon", "text": ";", "start": 22, "end": 23 },
            { "kind": "Identifier", "text": "b", "start": 24, "end": 25 },
            { "kind": "Operator", "text": "<<", "start": 26, "end": 28 },
            { "kind": "Number", "text": "1", "start": 29, "end": 30, "rawText": "1" }
        ])
    );

    Ok(())
}

#[test]
fn serialize_program() -> Result<()> {
    let program = parse_source("let a = 1;")?;
    let value = serde_json::to_value(&program)?;

    assert_eq!(
        value,
        json!({
            "type": "Program",
            "start": 0,
            "end": 10,
            "body": [{
                "type": "VariableDeclaration",
                "start": 0,
                "end": 10,
                "kind": "let",
                "declarations": [{
                    "type": "VariableDeclarator",
                    "start": 4,
                    "end": 9,
                    "id": { "type": "Identifier", "start": 4, "end": 5, "name": "a" },
                    "init": { "type": "Literal", "start": 8, "end": 9, "value": "1", "raw": "1" }
                }]
            }]
        })
    );

    let empty = serde_json::to_value(parse_source("")?)?;
    assert_eq!(empty, json!({ "type": "Program", "start": 0, "end": null, "body": [] }));

    Ok(())
}

#[test]
fn serialize_expression() -> Result<()> {
    let program = parse_source("export * from 'foo'; a - b.c")?;
    let value = serde_json::to_value(&program)?;

    assert_eq!(
        value["body"][0],
        json!({
            "type": "ExportAllDeclaration",
            "start": 0,
            "end": 19,
            "exported": null,
            "source": { "type": "Literal", "start": 14, "end": 19, "value": "foo", "raw": "'foo'" }
        })
    );

    let binary = &value["body"][1]["expression"];
    assert_eq!(binary["type"], "BinaryExpression");
    assert_eq!(binary["operator"], "-");
    assert_eq!(binary["right"]["type"], "MemberExpression");
    assert_eq!(binary["right"]["computed"], false);

    Ok(())
}
