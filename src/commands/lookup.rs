//! One-shot lookup command
//!
//! Issues a single lookup, waits for it, and prints the outcome.

use crate::controller::{FetchState, QueryController};
use crate::core::QueryMode;
use crate::output::{print_lookup_header, print_summary, print_view};
use crate::view::View;
use anyhow::{Result, bail};
use tokio::runtime::Handle;

/// Configuration for a single lookup
pub struct LookupConfig {
    pub letters: String,
    pub mode: QueryMode,
    pub show_definitions: bool,
}

/// Run one lookup to completion
///
/// Returns `None` when the letters are blank and nothing was sent.
pub async fn lookup(
    controller: &mut QueryController,
    letters: &str,
    mode: QueryMode,
) -> Option<FetchState> {
    controller.set_input(letters);
    controller.set_mode(mode);
    controller.trigger()?;
    Some(controller.settle().await.clone())
}

/// Run the lookup command and print the results
///
/// # Errors
///
/// Returns an error if the letters are blank or the engine fails.
pub fn run_lookup(
    runtime: &Handle,
    controller: &mut QueryController,
    config: &LookupConfig,
) -> Result<()> {
    let Some(state) = runtime.block_on(lookup(controller, &config.letters, config.mode)) else {
        bail!("nothing to look up: letters are blank");
    };

    if let Some(descriptor) = state.descriptor() {
        print_lookup_header(descriptor);
    }
    print_view(View::project(&state), config.show_definitions);

    match &state {
        FetchState::Fulfilled(_, results) => {
            print_summary(results.len());
            Ok(())
        }
        FetchState::Failed(_, message) => bail!("lookup failed: {message}"),
        FetchState::Idle | FetchState::Pending(_) => bail!("lookup did not complete"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::SearchResult;
    use crate::dictionary::Dictionary;
    use crate::engine::LocalEngine;
    use std::sync::Arc;

    fn controller() -> QueryController {
        let dictionary = Dictionary::from_entries([
            SearchResult::new("cat", "A feline."),
            SearchResult::new("act", "A deed."),
            SearchResult::new("cart", "A wagon."),
        ]);
        QueryController::new(
            Arc::new(LocalEngine::new(Arc::new(dictionary))),
            Handle::current(),
        )
    }

    #[tokio::test]
    async fn lookup_settles_with_results() {
        let mut controller = controller();
        let state = lookup(&mut controller, "ca", QueryMode::Prefix).await.unwrap();

        let words: Vec<_> = state
            .results()
            .unwrap()
            .iter()
            .map(|r| r.word.as_str())
            .collect();
        assert_eq!(words, ["cart", "cat"]);
    }

    #[tokio::test]
    async fn blank_lookup_sends_nothing() {
        let mut controller = controller();
        assert_eq!(lookup(&mut controller, " \t", QueryMode::Normal).await, None);
        assert_eq!(controller.state(), &FetchState::Idle);
    }

    #[test]
    fn run_lookup_fails_on_blank_letters() {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        let mut controller = {
            let _guard = runtime.enter();
            controller()
        };
        let config = LookupConfig {
            letters: "   ".to_string(),
            mode: QueryMode::Normal,
            show_definitions: false,
        };

        let err = run_lookup(runtime.handle(), &mut controller, &config).unwrap_err();
        assert!(err.to_string().contains("blank"));
    }
}
