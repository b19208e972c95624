/// Raw submission as it arrives from the outside world. Validation happens in
/// the decide step, not here.
#[derive(Debug, Clone)]
pub struct SubmitRsvp {
    pub name: String,
    pub response: String,
}
