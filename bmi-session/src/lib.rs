use bmi_advice::AdviceGateway;
use bmi_model::{
    advice::{AdviceRequest, HealthAdvice},
    input::{InputField, RawInput},
    result::BmiResult,
    unit::UnitSystem,
};
use futures::lock::Mutex;
use log::{debug, info, warn};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum AdviceState {
    #[default]
    NotRequested,
    Ready(HealthAdvice),
    Unavailable,
}

/// Proof that an advice request was started for a particular state of the inputs.
#[derive(Debug)]
pub struct AdviceTicket {
    generation: u64,
    request: AdviceRequest,
}

impl AdviceTicket {
    pub fn request(&self) -> &AdviceRequest {
        &self.request
    }
}

/// Transient calculator state driven by a presentation layer.
///
/// The result is recomputed from the unit system and raw input on every
/// change. Advice is cleared whenever the inputs that produced it change, and
/// responses to requests started before such a change are dropped.
#[derive(Debug, Default)]
pub struct Session {
    unit_system: UnitSystem,
    raw_input: RawInput,
    result: Option<BmiResult>,
    advice: AdviceState,
    loading: bool,
    generation: u64,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn unit_system(&self) -> UnitSystem {
        self.unit_system
    }

    pub fn raw_input(&self) -> &RawInput {
        &self.raw_input
    }

    pub fn result(&self) -> Option<&BmiResult> {
        self.result.as_ref()
    }

    pub fn advice(&self) -> &AdviceState {
        &self.advice
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn set_unit_system(&mut self, unit_system: UnitSystem) {
        if self.unit_system == unit_system {
            return;
        }
        self.unit_system = unit_system;
        let previous = self.result;
        self.recompute();
        if self.result != previous {
            self.invalidate_advice();
        }
    }

    /// Returns `false` and leaves the field untouched if `text` is not numeric.
    pub fn set_field(&mut self, field: InputField, text: &str) -> bool {
        if !bmi_calc::is_numeric_text(text) {
            debug!("Rejected {} input \"{}\"", field, text);
            return false;
        }
        if self.raw_input.get(field) == text {
            return true;
        }

        self.raw_input.set(field, text);
        self.invalidate_advice();
        self.recompute();
        true
    }

    pub fn reset(&mut self) {
        self.raw_input = RawInput::new();
        self.invalidate_advice();
        self.recompute();
    }

    /// Starts an advice request for the current result. Returns `None` if
    /// there is no result or a request is already in flight.
    pub fn begin_advice_request(&mut self) -> Option<AdviceTicket> {
        if self.loading {
            debug!("Advice request already in flight");
            return None;
        }
        let result = self.result.as_ref()?;

        self.loading = true;
        Some(AdviceTicket {
            generation: self.generation,
            request: AdviceRequest::from(result),
        })
    }

    /// Applies the outcome of a request. Outcomes for requests started before
    /// the inputs last changed are discarded.
    pub fn complete_advice_request(
        &mut self,
        ticket: AdviceTicket,
        outcome: Result<HealthAdvice, bmi_advice::Error>,
    ) {
        if ticket.generation != self.generation {
            debug!("Discarding advice for outdated BMI {:.1}", ticket.request.bmi);
            return;
        }

        self.loading = false;
        self.advice = match outcome {
            Ok(advice) => {
                info!("Advice ready with {} tips", advice.tips.len());
                AdviceState::Ready(advice)
            }
            Err(e) => {
                warn!("Advice unavailable: {}", e);
                AdviceState::Unavailable
            }
        };
    }

    fn invalidate_advice(&mut self) {
        self.advice = AdviceState::NotRequested;
        self.loading = false;
        self.generation = self.generation.wrapping_add(1);
    }

    fn recompute(&mut self) {
        self.result = bmi_calc::compute_result(self.unit_system, &self.raw_input);
        match &self.result {
            Some(result) => debug!("Computed BMI {}", result),
            None => debug!("No BMI for current input"),
        }
    }
}

/// Requests advice for the session's current result. The session is only
/// locked while its state changes, never while the gateway is awaited.
///
/// Returns `false` if no request was issued.
pub async fn request_advice(session: &Mutex<Session>, gateway: &dyn AdviceGateway) -> bool {
    let Some(ticket) = session.lock().await.begin_advice_request() else {
        return false;
    };

    let outcome = gateway.fetch_advice(ticket.request()).await;
    session.lock().await.complete_advice_request(ticket, outcome);
    true
}
