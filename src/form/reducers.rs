use super::{
    actions::FormCommand,
    controller::{FormController, SubmitEvent, SubmitOutcome},
    events::EventSink,
};

/// Route one UI notification to the controller. Only `Submit` yields an
/// outcome.
pub fn apply_command(
    form: &mut FormController,
    command: FormCommand,
    sink: &mut impl EventSink,
) -> Option<SubmitOutcome> {
    match command {
        FormCommand::Input { name, value } => {
            form.input(&name, value);
            None
        }
        FormCommand::Blur { name } => {
            form.blur(&name);
            None
        }
        FormCommand::Submit => {
            let mut event = SubmitEvent::new();
            Some(form.handle_submit(&mut event, sink))
        }
    }
}
