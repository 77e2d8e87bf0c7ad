//! Optional diagnostics for resolve calls

use tracing::info;

use crate::core::resolver::StyledPrompt;

/// Inputs and output of one resolve call
#[derive(Debug, Clone, Copy)]
pub struct ResolveEvent<'a> {
    pub family: &'a str,
    pub positive: &'a str,
    pub negative: &'a str,
    pub result: &'a StyledPrompt,
}

/// Receives a [`ResolveEvent`] after each successful resolve
///
/// Hooks observe only; they cannot change the result.
pub trait ResolveHook {
    fn on_resolve(&self, event: &ResolveEvent<'_>);
}

/// Reports resolve calls through `tracing`
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingHook;

impl ResolveHook for TracingHook {
    fn on_resolve(&self, event: &ResolveEvent<'_>) {
        info!("family: {}", event.family);
        info!("style: {}", event.result.style);
        info!("text_positive: {}", event.positive);
        info!("text_negative: {}", event.negative);
        info!("positive_prompt: {}", event.result.positive);
        info!("negative_prompt: {}", event.result.negative);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    struct Recorder(RefCell<Vec<String>>);

    impl ResolveHook for Recorder {
        fn on_resolve(&self, event: &ResolveEvent<'_>) {
            self.0
                .borrow_mut()
                .push(format!("{}:{}", event.family, event.result.style));
        }
    }

    #[test]
    fn test_hook_receives_event() {
        let result = StyledPrompt {
            positive: "a cat".to_string(),
            negative: "ugly".to_string(),
            style: "plain".to_string(),
        };
        let recorder = Recorder(RefCell::new(Vec::new()));
        let hook: &dyn ResolveHook = &recorder;
        hook.on_resolve(&ResolveEvent {
            family: "misc",
            positive: "cat",
            negative: "",
            result: &result,
        });
        assert_eq!(recorder.0.borrow().as_slice(), ["misc:plain"]);
    }
}
