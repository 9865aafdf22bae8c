use std::cell::Cell;

/// Tracks the one popup operation that may talk to the provider at a time.
///
/// A second connect/disconnect/refresh while one is pending is turned away
/// instead of issuing an overlapping request.
#[derive(Debug, Default)]
pub struct InFlight {
    current: Cell<Option<&'static str>>,
}

/// Held for the duration of an operation, releases the slot on drop
#[derive(Debug)]
pub struct InFlightTicket<'a> {
    slot: &'a InFlight,
}

impl InFlight {
    pub fn new() -> Self {
        Self::default()
    }

    /// Claim the slot for `operation`.
    /// Returns Err(name of the pending operation) if another one holds it.
    pub fn try_begin(&self, operation: &'static str) -> Result<InFlightTicket<'_>, &'static str> {
        match self.current.get() {
            Some(pending) => Err(pending),
            None => {
                self.current.set(Some(operation));
                Ok(InFlightTicket { slot: self })
            }
        }
    }
}

impl Drop for InFlightTicket<'_> {
    fn drop(&mut self) {
        self.slot.current.set(None);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_second_operation_rejected_while_pending() {
        let in_flight = InFlight::new();

        let ticket = in_flight.try_begin("connect").unwrap();
        assert_eq!(in_flight.try_begin("refresh").unwrap_err(), "connect");
        assert_eq!(in_flight.try_begin("connect").unwrap_err(), "connect");

        drop(ticket);
        let ticket = in_flight.try_begin("refresh").unwrap();
        assert_eq!(in_flight.try_begin("disconnect").unwrap_err(), "refresh");
        drop(ticket);
    }
}
