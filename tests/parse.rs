
use jsyn::ast::{Expression, ImportSpec, NodeKind, Statement, VariableKind};
use jsyn::token::{Keyword, LitKind, Punct, TokenKind};
use jsyn::{parse_source, parse_tokens, tokenize, Error, Result};

#[test]
fn parse_variable_declaration() -> Result<()> {
    let program = parse_source("let a = 1;")?;
    assert_eq!((program.start, program.end), (0, Some(10)));
    assert_eq!(program.body.len(), 1);

    let decl = match &program.body[0] {
        Statement::Variable(decl) => decl,
        other => panic!("expect variable declaration, found {:?}", other.kind()),
    };

    assert_eq!(decl.kind, VariableKind::Let);
    assert_eq!((decl.start, decl.end), (0, 10));
    assert_eq!(decl.declarations.len(), 1);

    let declarator = &decl.declarations[0];
    assert_eq!((declarator.start, declarator.end), (4, 9));
    assert_eq!(declarator.id.name, "a");
    assert_eq!((declarator.id.start, declarator.id.end), (4, 5));
    match &declarator.init {
        Some(Expression::Literal(lit)) => {
            assert_eq!(lit.value, "1");
            assert_eq!((lit.start, lit.end), (8, 9));
        }
        _ => panic!("expect literal initializer"),
    }

    spans::check_program(&program);
    Ok(())
}

#[test]
fn parse_member_chain() -> Result<()> {
    let program = parse_source("foo.bar.zoo")?;
    assert_eq!((program.start, program.end), (0, Some(11)));

    let outer = match &program.body[0] {
        Statement::Expression(stmt) => match &stmt.expression {
            Expression::Member(member) => member,
            _ => panic!("expect member expression"),
        },
        _ => panic!("expect expression statement"),
    };

    assert_eq!(outer.property.name, "zoo");
    assert_eq!((outer.property.start, outer.property.end), (8, 11));

    let inner = match outer.object.as_ref() {
        Expression::Member(member) => member,
        _ => panic!("expect inner member expression"),
    };
    assert_eq!((inner.start, inner.end), (0, 7));
    assert_eq!((inner.property.start, inner.property.end), (4, 7));
    match inner.object.as_ref() {
        Expression::Identifier(id) => {
            assert_eq!(id.name, "foo");
            assert_eq!((id.start, id.end), (0, 3));
        }
        _ => panic!("expect identifier object"),
    }

    spans::check_program(&program);
    Ok(())
}

#[test]
fn parse_function_declaration() -> Result<()> {
    let source = "function foo(a, b) { return a.add(b); }";
    let program = parse_source(source)?;

    let func = match &program.body[0] {
        Statement::Function(func) => func,
        _ => panic!("expect function declaration"),
    };

    assert_eq!((func.start, func.end), (0, 39));
    assert_eq!(func.id.as_ref().map(|id| id.name.as_str()), Some("foo"));
    let params = func.params.iter().map(|x| x.name.as_str()).collect::<Vec<_>>();
    assert_eq!(params, ["a", "b"]);
    assert_eq!(func.body.body.len(), 1);

    let ret = match &func.body.body[0] {
        Statement::Return(ret) => ret,
        _ => panic!("expect return statement"),
    };
    // the call covers the `;` right behind it
    assert_eq!((ret.start, ret.end), (21, 37));

    let call = match &ret.argument {
        Expression::Call(call) => call,
        _ => panic!("expect call expression"),
    };
    assert_eq!((call.start, call.end), (28, 37));
    assert_eq!(call.callee.kind(), NodeKind::MemberExpression);
    assert_eq!(call.arguments.len(), 1);
    assert!(matches!(&call.arguments[0], Expression::Identifier(id) if id.name == "b"));

    spans::check_program(&program);
    Ok(())
}

#[test]
fn parse_import_declaration() -> Result<()> {
    let program = parse_source("import foo, { name1, name2 as bar } from 'foo';")?;
    assert_eq!(program.body.len(), 1);

    let import = match &program.body[0] {
        Statement::Import(import) => import,
        _ => panic!("expect import declaration"),
    };

    assert_eq!((import.start, import.end), (0, 46));
    assert_eq!(import.source.value, "foo");
    assert_eq!(import.source.raw, "'foo'");

    let specs = import
        .specifiers
        .iter()
        .map(|spec| match spec {
            ImportSpec::Default(x) => ("default", x.local.name.as_str(), x.local.name.as_str()),
            ImportSpec::Named(x) => ("named", x.imported.name.as_str(), x.local.name.as_str()),
            ImportSpec::Namespace(x) => ("namespace", "*", x.local.name.as_str()),
        })
        .collect::<Vec<_>>();

    assert_eq!(
        specs,
        [
            ("default", "foo", "foo"),
            ("named", "name1", "name1"),
            ("named", "name2", "bar"),
        ]
    );

    spans::check_program(&program);
    Ok(())
}

#[test]
fn parse_export_all() -> Result<()> {
    let program = parse_source("export * from 'foo';")?;
    let export = match &program.body[0] {
        Statement::ExportAll(export) => export,
        _ => panic!("expect export all declaration"),
    };

    assert!(export.exported.is_none());
    assert_eq!(export.source.value, "foo");
    assert_eq!((export.start, export.end), (0, 19));

    spans::check_program(&program);
    Ok(())
}

#[test]
fn parse_module() -> Result<()> {
    let source = include_str!("testdata/module.js");
    let program = parse_source(source)?;

    let kinds = program.body.iter().map(Statement::kind).collect::<Vec<_>>();
    assert_eq!(
        kinds,
        [
            NodeKind::ImportDeclaration,
            NodeKind::ImportDeclaration,
            NodeKind::ImportDeclaration,
            NodeKind::VariableDeclaration,
            NodeKind::VariableDeclaration,
            NodeKind::FunctionDeclaration,
            NodeKind::ExpressionStatement,
            NodeKind::BlockStatement,
            NodeKind::ExportNamedDeclaration,
            NodeKind::ExportNamedDeclaration,
            NodeKind::ExportNamedDeclaration,
            NodeKind::ExportDefaultDeclaration,
            NodeKind::ExportAllDeclaration,
        ]
    );

    spans::check_program(&program);
    Ok(())
}

#[test]
fn parse_empty_source() -> Result<()> {
    for source in ["", " ", "\n\t\r\n  "] {
        let program = parse_source(source)?;
        assert!(program.body.is_empty());
        assert_eq!((program.start, program.end), (0, None));
        assert_eq!(program.kind(), NodeKind::Program);
    }

    Ok(())
}

#[test]
fn parse_deterministic() -> Result<()> {
    let source = include_str!("testdata/module.js");
    assert_eq!(tokenize(source)?, tokenize(source)?);
    assert_eq!(parse_source(source)?, parse_source(source)?);
    assert_eq!(parse_tokens(tokenize(source)?)?, parse_source(source)?);
    Ok(())
}

#[test]
fn parse_in_threads() -> Result<()> {
    let sources = [
        "let a = 1;",
        "foo.bar.zoo",
        "function foo(a, b) { return a.add(b); }",
        "import foo, { name1, name2 as bar } from 'foo';",
        "export * from 'foo';",
    ];

    let expect = sources
        .iter()
        .map(parse_source)
        .collect::<Result<Vec<_>>>()?;

    let actual = std::thread::scope(|scope| {
        let handles = sources
            .iter()
            .map(|source| scope.spawn(move || parse_source(source)))
            .collect::<Vec<_>>();

        handles
            .into_iter()
            .map(|handle| handle.join().expect("parser thread panicked"))
            .collect::<Result<Vec<_>>>()
    })?;

    assert_eq!(expect, actual);
    Ok(())
}

#[test]
fn tokenize_raw_text() -> Result<()> {
    let source = include_str!("testdata/module.js");
    let tokens = tokenize(source)?;
    assert!(!tokens.is_empty());

    let mut last = 0;
    for tok in &tokens {
        assert!(tok.start >= last, "token {} overlaps its predecessor", tok);
        assert!(!tok.is_empty());
        let lexeme = tok.raw_text.as_deref().unwrap_or(&tok.text);
        assert_eq!(tok.len(), lexeme.len());
        assert_eq!(&source[tok.start..tok.end], lexeme);
        last = tok.end;
    }

    Ok(())
}

#[test]
fn tokenize_malformed_number() {
    let err = tokenize("let a = 123.45.6").unwrap_err();
    assert_eq!(err, Error::UnexpectedChar { pos: 14, ch: '.' });
    assert!(err.to_string().contains("'.'"));
    assert!(parse_source("123.45.6").is_err());
}

#[test]
fn parse_unexpected_statement() {
    let sources = [
        "1 + a",
        "'a'",
        ";",
        "}",
        "(a)",
        "as",
        "from 'a'",
        "default",
        "* a",
        "- a",
        "= a",
        ". a",
        ", a",
    ];

    for source in sources {
        match parse_source(source) {
            Err(Error::UnexpectedToken { pos, expect, actual }) => {
                assert_eq!(pos, 0, "{source:?}");
                assert!(actual.is_some(), "{source:?}");
                assert!(expect.contains(&TokenKind::Literal(LitKind::Ident)));
                assert!(expect.contains(&TokenKind::Keyword(Keyword::Export)));
                assert!(expect.contains(&TokenKind::Punct(Punct::BraceLeft)));
            }
            other => panic!("{source:?} should fail, found {other:?}"),
        }
    }

    // the failure is positioned at the offending statement
    let err = parse_source("let a = 1; 2").unwrap_err();
    assert_eq!(err.pos(), 11);
}
