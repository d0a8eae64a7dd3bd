use chromactl::{ChromactlError, Dispatcher, Handler};
use proptest::prelude::*;
use std::cell::RefCell;
use std::rc::Rc;

/// Test handler recording every invocation
struct Recording {
    name: String,
    calls: Rc<RefCell<Vec<Vec<String>>>>,
}

impl Recording {
    fn new(name: &str) -> (Self, Rc<RefCell<Vec<Vec<String>>>>) {
        let calls = Rc::new(RefCell::new(Vec::new()));
        (
            Self {
                name: name.to_string(),
                calls: calls.clone(),
            },
            calls,
        )
    }
}

impl Handler for Recording {
    fn name(&self) -> &str {
        &self.name
    }

    fn about(&self) -> &str {
        "recording test handler"
    }

    fn run(&self, args: &[String]) -> anyhow::Result<()> {
        self.calls.borrow_mut().push(args.to_vec());
        Ok(())
    }
}

fn build_demo_dispatcher() -> (
    Dispatcher,
    Rc<RefCell<Vec<Vec<String>>>>,
    Rc<RefCell<Vec<Vec<String>>>>,
) {
    let mut dispatcher = Dispatcher::new();
    let (build, build_calls) = Recording::new("build");
    let (demo, demo_calls) = Recording::new("demo");
    dispatcher.register(build).unwrap();
    dispatcher.register(demo).unwrap();
    (dispatcher, build_calls, demo_calls)
}

fn tokens(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Dispatch scenario tests over the public API
#[cfg(test)]
mod dispatch_tests {
    use super::*;

    #[test]
    fn test_build_routes_to_build_handler() {
        let (dispatcher, build_calls, demo_calls) = build_demo_dispatcher();

        dispatcher.dispatch("build", &[]).unwrap();

        assert_eq!(*build_calls.borrow(), vec![Vec::<String>::new()]);
        assert!(demo_calls.borrow().is_empty());
    }

    #[test]
    fn test_demo_routes_to_demo_handler() {
        let (dispatcher, build_calls, demo_calls) = build_demo_dispatcher();

        dispatcher.dispatch("demo", &tokens(&["x", "y"])).unwrap();

        assert!(build_calls.borrow().is_empty());
        assert_eq!(*demo_calls.borrow(), vec![tokens(&["x", "y"])]);
    }

    #[test]
    fn test_deploy_is_unknown() {
        let (dispatcher, build_calls, demo_calls) = build_demo_dispatcher();

        let err = dispatcher.dispatch("deploy", &[]).unwrap_err();
        match err {
            ChromactlError::UnknownCommand { name, available } => {
                assert_eq!(name, "deploy");
                assert_eq!(available, tokens(&["build", "demo"]));
            }
            other => panic!("unexpected error: {}", other),
        }

        assert!(build_calls.borrow().is_empty());
        assert!(demo_calls.borrow().is_empty());
    }

    #[test]
    fn test_registry_lists_all_commands_in_order() {
        let (dispatcher, _, _) = build_demo_dispatcher();
        assert_eq!(dispatcher.command_names(), tokens(&["build", "demo"]));
        assert_eq!(dispatcher.len(), 2);
    }
}

proptest! {
    /// A registered command invokes exactly its handler, with args unchanged.
    #[test]
    fn prop_dispatch_passes_args_unchanged(
        args in prop::collection::vec(".{0,12}", 0..6)
    ) {
        let (dispatcher, build_calls, demo_calls) = build_demo_dispatcher();

        dispatcher.dispatch("build", &args).unwrap();

        prop_assert_eq!(&*build_calls.borrow(), &vec![args]);
        prop_assert!(demo_calls.borrow().is_empty());
    }

    /// An unregistered name invokes nothing and names every supported command.
    #[test]
    fn prop_unknown_names_invoke_nothing(
        name in "[a-zA-Z0-9_-]{0,16}",
        args in prop::collection::vec("[a-z0-9]{0,8}", 0..4)
    ) {
        prop_assume!(name != "build" && name != "demo");

        let (dispatcher, build_calls, demo_calls) = build_demo_dispatcher();

        let err = dispatcher.dispatch(&name, &args).unwrap_err();
        match err {
            ChromactlError::UnknownCommand { name: reported, available } => {
                prop_assert_eq!(reported, name);
                prop_assert_eq!(available, tokens(&["build", "demo"]));
            }
            other => panic!("unexpected error: {}", other),
        }

        prop_assert!(build_calls.borrow().is_empty());
        prop_assert!(demo_calls.borrow().is_empty());
    }

    /// Repeated dispatch against the same registry resolves the same handler.
    #[test]
    fn prop_dispatch_is_idempotent(repeats in 1usize..8) {
        let (dispatcher, build_calls, _) = build_demo_dispatcher();

        for _ in 0..repeats {
            dispatcher.dispatch("build", &[]).unwrap();
        }

        prop_assert_eq!(build_calls.borrow().len(), repeats);
    }
}
