use std::cell::RefCell;
use std::rc::Rc;

use argmatch_core::{Claim, Fragment, Matcher, MissingValueError, PositionalMode, Value};
use argmatch_manager::{
    ArgumentsManager, Diagnostic, Hooks, ParameterOptions, ParseError, Transform,
    TransformError, ValueType,
};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Hooks that record diagnostics and termination codes instead of logging.
struct Recorder {
    diagnostics: Rc<RefCell<Vec<Diagnostic>>>,
    exits: Rc<RefCell<Vec<i32>>>,
}

impl Recorder {
    fn install(manager: &mut ArgumentsManager) -> Self {
        let diagnostics = Rc::new(RefCell::new(Vec::new()));
        let exits = Rc::new(RefCell::new(Vec::new()));
        let diag_sink = Rc::clone(&diagnostics);
        let exit_sink = Rc::clone(&exits);
        manager.set_hooks(
            Hooks::default()
                .on_diagnostic(move |d| diag_sink.borrow_mut().push(d.clone()))
                .on_terminate(move |code| exit_sink.borrow_mut().push(code)),
        );
        Self { diagnostics, exits }
    }
}

/// A custom matcher with two mutually exclusive triggers, rendered as two
/// clauses and bracketing itself.
#[derive(Debug, Default)]
struct Verbosity {
    level: Option<&'static str>,
}

impl Matcher for Verbosity {
    fn offer(&mut self, tokens: &[String], cursor: usize) -> Result<Claim, MissingValueError> {
        match tokens[cursor].as_str() {
            "--quiet" => self.level = Some("quiet"),
            "--loud" => self.level = Some("loud"),
            _ => return Ok(Claim::NotClaimed),
        }
        Ok(Claim::Single)
    }

    fn state(&self) -> Value {
        self.level.map_or(Value::Null, Value::from)
    }

    fn describe_help(&self, _name: &str) -> Fragment {
        vec!["--quiet".to_string(), "--loud".to_string()].into()
    }

    fn describe_usage(&self, _name: &str) -> Fragment {
        vec!["[--quiet".to_string(), "--loud]".to_string()].into()
    }

    fn optionality_is_self_rendered(&self) -> bool {
        true
    }

    fn reset(&mut self) {
        self.level = None;
    }
}

// ---------------------------------------------------------------------------
// Matcher variants through the orchestrator
// ---------------------------------------------------------------------------

#[test]
fn switch_present_and_absent() {
    let mut manager = ArgumentsManager::new("prog");
    manager.add_switch("-d", ParameterOptions::new());

    assert_eq!(manager.parse(["-d"]).unwrap().get("d"), Some(&Value::Bool(true)));
    assert_eq!(manager.parse(Vec::<String>::new()).unwrap().get("d"), Some(&Value::Bool(false)));
}

#[test]
fn single_value_and_default() {
    let mut manager = ArgumentsManager::new("prog");
    manager.add_option("-f", ParameterOptions::new());

    assert_eq!(manager.parse(["-f", "x.txt"]).unwrap().get_str("f"), Some("x.txt"));
    assert_eq!(manager.parse(Vec::<String>::new()).unwrap().get("f"), Some(&Value::Null));
}

#[test]
fn tuple_does_not_over_consume() {
    let mut manager = ArgumentsManager::new("prog");
    manager
        .add_tuple_option("-p", 3, None, ParameterOptions::new())
        .add_parameter("next", ParameterOptions::new());

    let result = manager.parse(["-p", "A", "B", "C", "D"]).unwrap();
    assert_eq!(result.get("p"), Some(&Value::list(["A", "B", "C"])));
    assert_eq!(result.get_str("next"), Some("D"));
}

#[test]
fn multi_value_preserves_insertion_order() {
    let mut manager = ArgumentsManager::new("prog");
    manager.add_multi_option("-m", ParameterOptions::new());

    let result = manager.parse(["-m", "a", "-m", "b"]).unwrap();
    assert_eq!(result.get("m"), Some(&Value::list(["a", "b"])));
}

#[test]
fn multi_tuple_collects_each_occurrence() {
    let mut manager = ArgumentsManager::new("prog");
    manager.add_multi_tuple_option(
        ["-e", "--edge"],
        2,
        Some(vec!["from".into(), "to".into()]),
        ParameterOptions::new(),
    );

    let result = manager.parse(["-e", "a", "b", "--edge", "b", "c"]).unwrap();
    assert_eq!(
        result.get("edge"),
        Some(&Value::List(vec![Value::list(["a", "b"]), Value::list(["b", "c"])]))
    );
    assert_eq!(manager.make_usage("graph"), "Usage : graph [(-e/--edge <from> <to>)...]");
}

#[test]
fn key_value_catch_all_leaves_plain_tokens() {
    let mut manager = ArgumentsManager::new("prog");
    manager
        .enable_property_arguments("props")
        .add_multi_parameter("rest", ParameterOptions::new());

    let result = manager.parse(["key=value", "novalue"]).unwrap();
    assert_eq!(result.get("props").and_then(|v| v.get("key")), Some(&Value::from("value")));
    assert_eq!(result.get("rest"), Some(&Value::list(["novalue"])));
}

#[test]
fn positional_last_keeps_final_token() {
    let mut manager = ArgumentsManager::new("prog");
    manager.add_positional("target", PositionalMode::Last, ParameterOptions::new());

    let result = manager.parse(["a", "b", "c"]).unwrap();
    assert_eq!(result.get_str("target"), Some("c"));
}

#[test]
fn named_property_with_default() {
    let mut manager = ArgumentsManager::new("prog");
    manager.add_property("mode", ParameterOptions::new().default_value("slow"));

    assert_eq!(manager.parse(["mode=fast"]).unwrap().get_str("mode"), Some("fast"));
    assert_eq!(manager.parse(["other=1"]).unwrap().get_str("mode"), Some("slow"));
}

#[test]
fn named_property_takes_its_assignment_first() {
    let mut manager = ArgumentsManager::new("prog");
    manager
        .add_property("mode", ParameterOptions::new())
        .enable_property_arguments("props");

    let result = manager.parse(["mode=fast", "level=3"]).unwrap();
    assert_eq!(result.get_str("mode"), Some("fast"));
    let props = result.get("props").and_then(Value::as_map).unwrap();
    assert!(!props.contains_key("mode"));
    assert_eq!(props.get("level"), Some(&Value::from("3")));
}

#[test]
fn output_mode_matcher() {
    let mut manager = ArgumentsManager::new("prog");
    manager.add_output_mode(
        "output",
        ParameterOptions::new().description(vec!["Write to a file", "Print to stdout"]),
    );

    let result = manager.parse(["--stringified-output", "-o", "out.json"]).unwrap();
    let output = result.get("output").unwrap();
    assert_eq!(output.get("file"), Some(&Value::from("out.json")));
    assert_eq!(output.get("stdout"), Some(&Value::from("string")));

    assert_eq!(
        manager.make_help("prog"),
        "Usage : prog [-o <file>] [--stringified-output | --log-output]\n\
         -o <file>\t: Write to a file\n\
         --stringified-output | --log-output\t: Print to stdout"
    );
}

// ---------------------------------------------------------------------------
// Orchestration
// ---------------------------------------------------------------------------

#[test]
fn earlier_registration_has_priority() {
    let mut manager = ArgumentsManager::new("prog");
    manager
        .add_switch("-x", ParameterOptions::new().dest("first"))
        .add_switch("-x", ParameterOptions::new().dest("second"));

    let result = manager.parse(["-x"]).unwrap();
    assert!(result.flag("first"));
    assert!(!result.flag("second"));
}

#[test]
fn positional_registered_first_swallows_triggers() {
    let mut manager = ArgumentsManager::new("prog");
    manager
        .add_parameter("param", ParameterOptions::new())
        .add_switch("-s", ParameterOptions::new());

    let result = manager.parse(["-s", "-s"]).unwrap();
    assert_eq!(result.get_str("param"), Some("-s"));
    assert!(result.flag("s"));
}

#[test]
fn unclaimed_tokens_are_dropped_and_reported() {
    let mut manager = ArgumentsManager::new("prog");
    manager.add_switch("-d", ParameterOptions::new());

    let result = manager.parse(["what", "-d", "--unknown"]).unwrap();
    assert!(result.flag("d"));
    assert_eq!(result.unclaimed, vec!["what", "--unknown"]);
    assert_eq!(result.len(), 1);
}

#[test]
fn missing_value_aborts_parse() {
    let mut manager = ArgumentsManager::new("prog");
    manager.add_option(["-f", "--file"], ParameterOptions::new());

    let err = manager.parse(["--file"]).unwrap_err();
    assert!(matches!(err, ParseError::MissingValue(ref e) if e.trigger == "--file"));
}

#[test]
fn one_entry_per_destination() {
    let mut manager = ArgumentsManager::new("prog");
    manager
        .add_switch("-a", ParameterOptions::new())
        .add_option("-b", ParameterOptions::new())
        .add_multi_option("-c", ParameterOptions::new().hidden())
        .add_matcher("verbosity", Verbosity::default(), ParameterOptions::new())
        .add_multi_parameter("rest", ParameterOptions::new());

    let result = manager.parse(["-a", "x", "--loud"]).unwrap();
    let keys: Vec<&str> = result.values.keys().map(String::as_str).collect();
    assert_eq!(keys, vec!["a", "b", "c", "rest", "verbosity"]);
    assert_eq!(result.get_str("verbosity"), Some("loud"));
}

#[test]
fn repeated_parses_do_not_leak_state() {
    let mut manager = ArgumentsManager::new("prog");
    manager
        .add_multi_option("-m", ParameterOptions::new())
        .add_switch("-d", ParameterOptions::new())
        .add_parameter("first", ParameterOptions::new());

    let first = manager.parse(["-m", "a", "-d", "one"]).unwrap();
    assert_eq!(first.get("m"), Some(&Value::list(["a"])));

    let second = manager.parse(["two"]).unwrap();
    assert_eq!(second.get("m"), Some(&Value::List(Vec::new())));
    assert!(!second.flag("d"));
    assert_eq!(second.get_str("first"), Some("two"));
}

// ---------------------------------------------------------------------------
// Missing-argument policy
// ---------------------------------------------------------------------------

#[test]
fn mandatory_positional_raises_with_single_record() {
    let mut manager = ArgumentsManager::new("prog");
    manager
        .add_parameter("input", ParameterOptions::new().mandatory().description("Input"))
        .add_switch("-v", ParameterOptions::new());
    manager.set_missing_argument_behavior(None, None, true);

    let err = manager.parse(Vec::<String>::new()).unwrap_err();
    let ParseError::MissingParameters(missing) = err else {
        panic!("expected MissingParameters");
    };
    assert_eq!(missing.missing.len(), 1);
    assert_eq!(missing.missing[0].destination, "input");
    assert_eq!(missing.missing[0].usage, vec!["<input>"]);
}

#[test]
fn policy_logs_then_terminates_then_raises() {
    let mut manager = ArgumentsManager::new("prog");
    manager
        .add_switch("-s", ParameterOptions::new().dest("switch").mandatory())
        .add_parameter("param", ParameterOptions::new().mandatory())
        .set_missing_argument_behavior(Some("Missing mandatory argument"), Some(2), true);
    let recorder = Recorder::install(&mut manager);

    let err = manager.parse(Vec::<String>::new()).unwrap_err();
    assert!(matches!(err, ParseError::MissingParameters(ref e) if e.missing.len() == 2));
    assert_eq!(*recorder.exits.borrow(), vec![2]);
    assert_eq!(
        recorder.diagnostics.borrow()[0].to_string(),
        "Missing mandatory argument : -s, <param>"
    );
}

#[test]
fn lenient_policy_returns_result_with_missing() {
    let mut manager = ArgumentsManager::new("prog");
    manager
        .add_option("-o", ParameterOptions::new().mandatory())
        .set_missing_argument_behavior(None, None, false);
    let recorder = Recorder::install(&mut manager);

    let result = manager.parse(Vec::<String>::new()).unwrap();
    assert!(!result.is_complete());
    assert_eq!(result.missing[0].destination, "o");
    assert!(recorder.diagnostics.borrow().is_empty());
    assert!(recorder.exits.borrow().is_empty());
}

#[test]
fn default_does_not_satisfy_mandatory() {
    let mut manager = ArgumentsManager::new("prog");
    manager
        .add_option("-o", ParameterOptions::new().mandatory().default_value("x"))
        .set_missing_argument_behavior(None, None, false);

    let result = manager.parse(Vec::<String>::new()).unwrap();
    assert_eq!(result.get_str("o"), Some("x"));
    assert_eq!(result.missing.len(), 1);
}

// ---------------------------------------------------------------------------
// Transforms
// ---------------------------------------------------------------------------

#[test]
fn numeric_transform_applies() {
    let mut manager = ArgumentsManager::new("prog");
    manager
        .add_option(["-n", "--number"], ParameterOptions::new().value_type(ValueType::Number))
        .add_multi_option("-i", ParameterOptions::new().value_type(ValueType::Integer));

    let result = manager.parse(["-n", "12", "-i", "1", "-i", "2"]).unwrap();
    assert_eq!(result.get("number"), Some(&Value::Number(12.0)));
    assert_eq!(result.get("i"), Some(&Value::List(vec![Value::Integer(1), Value::Integer(2)])));
}

#[test]
fn transform_failure_keeps_raw_value_and_reports() {
    let mut manager = ArgumentsManager::new("prog");
    manager.add_option(["-n", "--number"], ParameterOptions::new().value_type(ValueType::Number));
    let recorder = Recorder::install(&mut manager);

    let result = manager.parse(["-n", "twelve"]).unwrap();
    assert_eq!(result.get_str("number"), Some("twelve"));
    assert_eq!(
        *recorder.diagnostics.borrow(),
        vec![Diagnostic::TransformFailed {
            destination: "number".into(),
            error: TransformError::InvalidNumber("twelve".into()),
        }]
    );
}

#[test]
fn custom_transform() {
    let mut manager = ArgumentsManager::new("prog");
    let split = Transform::custom(|value| match value.as_str() {
        Some(text) => Ok(Value::list(text.split(','))),
        None => Err(TransformError::Custom("expected text".into())),
    });
    manager.add_option("--tags", ParameterOptions::new().transform(split));

    let result = manager.parse(["--tags", "a,b"]).unwrap();
    assert_eq!(result.get("tags"), Some(&Value::list(["a", "b"])));
}

// ---------------------------------------------------------------------------
// Usage and help
// ---------------------------------------------------------------------------

fn sample_manager() -> ArgumentsManager {
    let mut manager = ArgumentsManager::new("test-parser");
    manager
        .add_switch("-s", ParameterOptions::new().dest("switch").description("A Switch (mandatory)").mandatory())
        .add_option(["-o", "--option"], ParameterOptions::new().description("An Option"))
        .add_option(["-n", "--number"], ParameterOptions::new().description("Needs a number"))
        .add_matcher(
            "verbosity",
            Verbosity::default(),
            ParameterOptions::new().description(vec!["Less output", "More output"]),
        )
        .add_parameter("param", ParameterOptions::new().description("A parameter"))
        .add_multi_parameter("files", ParameterOptions::new())
        .set_abstract("A test program");
    manager
}

#[test]
fn usage_line_exact() {
    assert_eq!(
        sample_manager().make_usage("test-parser"),
        "Usage : test-parser -s [-o/--option <option>] [-n/--number <number>] [--quiet --loud] \
         [<param>] [<files> ...]"
    );
}

#[test]
fn help_text_exact() {
    assert_eq!(
        sample_manager().make_help("test-parser"),
        "Usage : test-parser -s [-o/--option <option>] [-n/--number <number>] [--quiet --loud] \
         [<param>] [<files> ...]\n\
         A test program\n\
         -s\t: A Switch (mandatory)\n\
         -o/--option <option>\t: An Option\n\
         -n/--number <number>\t: Needs a number\n\
         --quiet\t: Less output\n\
         --loud\t: More output\n\
         <param>\t: A parameter\n\
         <files> ...\t: (undocumented)"
    );
}

#[test]
fn rendering_is_independent_of_parse_state() {
    let mut manager = sample_manager();
    let before = manager.make_help("test-parser");
    let _ = manager.parse(["-s", "-o", "x", "p", "f1", "f2"]).unwrap();
    assert_eq!(manager.make_help("test-parser"), before);
}
