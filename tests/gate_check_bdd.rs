//! Behavioural tests for the positive-emoji merge gate.

use cheergate::{
    CheergateConfig, GateCheck, GateError, GateOutcome, GateSettings, LookbackWindow,
    OctocrabGateway, PersonalAccessToken, RepositoryLocator, SentimentPolicy, report,
};
use chrono::{Duration, Utc};
use rstest::fixture;
use rstest_bdd::Slot;
use rstest_bdd_macros::{ScenarioState, given, scenario, then, when};
use serde_json::json;
use std::cell::RefCell;
use std::rc::Rc;
use tokio::runtime::Runtime;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Shared runtime wrapper that can be stored in rstest-bdd Slot.
#[derive(Clone)]
struct SharedRuntime(Rc<RefCell<Runtime>>);

impl SharedRuntime {
    fn new(runtime: Runtime) -> Self {
        Self(Rc::new(RefCell::new(runtime)))
    }

    fn block_on<F: std::future::Future>(&self, future: F) -> F::Output {
        self.0.borrow().block_on(future)
    }
}

#[derive(ScenarioState, Default)]
struct GateState {
    runtime: Slot<SharedRuntime>,
    server: Slot<MockServer>,
    outcome: Slot<GateOutcome>,
}

#[fixture]
fn gate_state() -> GateState {
    GateState::default()
}

/// Ensures the runtime and server are initialised in `GateState`.
fn ensure_runtime_and_server(gate_state: &GateState) -> Result<SharedRuntime, GateError> {
    if gate_state.runtime.with_ref(|_| ()).is_none() {
        let runtime = Runtime::new().map_err(|error| GateError::Io {
            message: format!("failed to create Tokio runtime: {error}"),
        })?;
        gate_state.runtime.set(SharedRuntime::new(runtime));
    }

    let shared_runtime = gate_state.runtime.get().ok_or_else(|| GateError::Api {
        message: "runtime not initialised".to_owned(),
    })?;

    if gate_state.server.with_ref(|_| ()).is_none() {
        gate_state
            .server
            .set(shared_runtime.block_on(MockServer::start()));
    }

    Ok(shared_runtime)
}

fn mount_closed_pulls(
    gate_state: &GateState,
    runtime: &SharedRuntime,
    body: serde_json::Value,
) -> Result<(), GateError> {
    let listing_mock = Mock::given(method("GET"))
        .and(path("/api/v3/repos/owner/repo/pulls"))
        .and(query_param("state", "closed"))
        .and(query_param("sort", "updated"))
        .and(query_param("direction", "desc"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body));

    gate_state
        .server
        .with_ref(|server| {
            runtime.block_on(listing_mock.mount(server));
        })
        .ok_or_else(|| GateError::Api {
            message: "mock server not initialised".to_owned(),
        })
}

#[expect(
    clippy::needless_pass_by_value,
    reason = "rstest-bdd passes owned step arguments"
)]
#[given(
    "a mock GitHub API server with pull request {pr:u64} titled {title} merged \
     {days_ago:u64} days ago"
)]
fn seed_merged_pull_request(
    gate_state: &GateState,
    pr: u64,
    title: String,
    days_ago: u64,
) -> Result<(), GateError> {
    let runtime = ensure_runtime_and_server(gate_state)?;

    let offset = i64::try_from(days_ago).map_err(|_| GateError::Api {
        message: format!("days_ago {days_ago} does not fit in i64"),
    })?;
    let merged_at = (Utc::now() - Duration::days(offset)).to_rfc3339();
    let body = json!([{
        "number": pr,
        "title": title.trim_matches('"'),
        "state": "closed",
        "user": { "login": "octocat" },
        "merged_at": merged_at,
        "updated_at": merged_at
    }]);

    mount_closed_pulls(gate_state, &runtime, body)
}

#[given("a mock GitHub API server with no merged pull requests")]
fn seed_empty_listing(gate_state: &GateState) -> Result<(), GateError> {
    let runtime = ensure_runtime_and_server(gate_state)?;

    let body = json!([{
        "number": 1,
        "title": "Closed without merging 🎉",
        "state": "closed",
        "user": { "login": "octocat" },
        "merged_at": null,
        "updated_at": "2025-01-01T00:00:00Z"
    }]);

    mount_closed_pulls(gate_state, &runtime, body)
}

#[expect(
    clippy::needless_pass_by_value,
    reason = "rstest-bdd passes owned step arguments"
)]
#[when("the gate check runs with a {days:u64} day window and bypass mode {bypass}")]
fn run_gate_check(gate_state: &GateState, days: u64, bypass: String) -> Result<(), GateError> {
    let server_url = gate_state
        .server
        .with_ref(MockServer::uri)
        .ok_or_else(|| GateError::InvalidUrl("mock server URL missing".to_owned()))?;

    let config = CheergateConfig {
        days: Some(days.to_string()),
        bypass_mode: Some(bypass.trim_matches('"').to_owned()),
        ..Default::default()
    };
    let settings = GateSettings::from_config(&config);

    let locator = RepositoryLocator::parse(&format!("{server_url}/owner/repo"))?;
    let token = PersonalAccessToken::new("valid-token")?;
    let policy = SentimentPolicy::builtin()?;
    let window = LookbackWindow::ending_at(Utc::now(), settings.days());

    let runtime = gate_state.runtime.get().ok_or_else(|| GateError::Api {
        message: "runtime not initialised".to_owned(),
    })?;

    let outcome = runtime.block_on(async {
        let gateway = OctocrabGateway::for_token(&token, &locator)?;
        GateCheck::new(&gateway)
            .run(&locator, &policy, window, &settings)
            .await
    })?;

    gate_state.outcome.set(outcome);
    Ok(())
}

fn rendered_output(outcome: &GateOutcome) -> Result<(String, String), GateError> {
    let mut out = Vec::new();
    let mut err = Vec::new();
    report::write_outcome(&mut out, &mut err, outcome)?;

    let stdout = String::from_utf8(out).map_err(|error| GateError::Io {
        message: error.to_string(),
    })?;
    let stderr = String::from_utf8(err).map_err(|error| GateError::Io {
        message: error.to_string(),
    })?;
    Ok((stdout, stderr))
}

#[expect(
    clippy::needless_pass_by_value,
    reason = "rstest-bdd passes owned step arguments"
)]
#[then("the gate passes and the listing includes {expected}")]
fn assert_passed_listing(gate_state: &GateState, expected: String) -> Result<(), GateError> {
    let outcome = gate_state.outcome.get().ok_or_else(|| GateError::Api {
        message: "gate outcome missing".to_owned(),
    })?;

    if !matches!(outcome, GateOutcome::Passed { .. }) {
        return Err(GateError::Api {
            message: format!("expected Passed, got {outcome:?}"),
        });
    }

    let (stdout, _) = rendered_output(&outcome)?;
    let expected_line = expected.trim_matches('"');
    if stdout.contains(expected_line) {
        Ok(())
    } else {
        Err(GateError::Api {
            message: format!("listing missing {expected}: {stdout}"),
        })
    }
}

#[expect(
    clippy::needless_pass_by_value,
    reason = "rstest-bdd passes owned step arguments"
)]
#[then("the gate fails with a message mentioning {expected}")]
fn assert_failed_with_message(gate_state: &GateState, expected: String) -> Result<(), GateError> {
    let outcome = gate_state.outcome.get().ok_or_else(|| GateError::Api {
        message: "gate outcome missing".to_owned(),
    })?;

    let expected_text = expected.trim_matches('"');
    match &outcome {
        GateOutcome::Failed { message, .. } if message.contains(expected_text) => {
            if !outcome.is_blocking() {
                return Err(GateError::Api {
                    message: "failed outcome should block the run".to_owned(),
                });
            }
            Ok(())
        }
        GateOutcome::Failed { message, .. } => Err(GateError::Api {
            message: format!("failure message missing {expected}: {message}"),
        }),
        other => Err(GateError::Api {
            message: format!("expected Failed, got {other:?}"),
        }),
    }
}

#[then("the gate warns without blocking")]
fn assert_bypass_warning(gate_state: &GateState) -> Result<(), GateError> {
    let outcome = gate_state.outcome.get().ok_or_else(|| GateError::Api {
        message: "gate outcome missing".to_owned(),
    })?;

    if !matches!(outcome, GateOutcome::BypassWarning { .. }) {
        return Err(GateError::Api {
            message: format!("expected BypassWarning, got {outcome:?}"),
        });
    }
    if outcome.is_blocking() {
        return Err(GateError::Api {
            message: "bypass warning should not block the run".to_owned(),
        });
    }

    let (_, stderr) = rendered_output(&outcome)?;
    if stderr.contains("warning: Running in bypass mode") {
        Ok(())
    } else {
        Err(GateError::Api {
            message: format!("missing bypass notice in warnings: {stderr}"),
        })
    }
}

#[scenario(path = "tests/features/gate_check.feature", index = 0)]
fn gate_passes_on_recent_positive_emoji_merge(gate_state: GateState) {
    let _ = gate_state;
}

#[scenario(path = "tests/features/gate_check.feature", index = 1)]
fn gate_fails_without_qualifying_merges(gate_state: GateState) {
    let _ = gate_state;
}

#[scenario(path = "tests/features/gate_check.feature", index = 2)]
fn gate_warns_in_bypass_mode(gate_state: GateState) {
    let _ = gate_state;
}
