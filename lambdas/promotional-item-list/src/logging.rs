use crate::config::Stage;
use tracing::Level;

pub fn max_level(stage: &Stage) -> Level {
    if stage.is_verbose() {
        Level::DEBUG
    } else {
        Level::INFO
    }
}

/// Installs the global subscriber. Call once, before the runtime starts.
pub fn init(stage: &Stage) {
    // required to enable CloudWatch error logging by the runtime
    tracing_subscriber::fmt()
        .json()
        .with_max_level(max_level(stage))
        // this needs to be set to remove duplicated information in the log.
        .with_current_span(false)
        // disabling time is handy because CloudWatch will add the ingestion time.
        .without_time()
        // remove the name of the function from every log entry
        .with_target(false)
        .init();
}

#[test]
fn verbose_stages_log_debug() {
    assert_eq!(max_level(&Stage::Dev), Level::DEBUG);
    assert_eq!(max_level(&Stage::Itg), Level::DEBUG);
    assert_eq!(max_level(&Stage::Other("prd".into())), Level::INFO);
}
