mod common;

mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use lumen_fixture::audio::{AmplitudeSensor, SampleAcquirer};
    use lumen_fixture::{Duration, SetupError};

    use super::common::FakeClock;

    /// Sensor that replays readings, each read taking a scripted amount of time
    struct ScriptedSensor {
        clock: Rc<Cell<u64>>,
        readings: Vec<Result<u16, ()>>,
        costs_us: Vec<u64>,
        index: usize,
    }

    impl AmplitudeSensor for ScriptedSensor {
        type Error = ();

        fn read_raw(&mut self) -> Result<u16, ()> {
            let reading = self.readings[self.index];
            self.clock.set(self.clock.get() + self.costs_us[self.index]);
            self.index += 1;
            reading
        }
    }

    fn acquirer(
        readings: Vec<Result<u16, ()>>,
        costs_us: Vec<u64>,
    ) -> (SampleAcquirer<ScriptedSensor, FakeClock, 4>, FakeClock) {
        let clock = FakeClock::default();
        let sensor = ScriptedSensor {
            clock: clock.now_us.clone(),
            readings,
            costs_us,
            index: 0,
        };
        let acquirer = SampleAcquirer::new(sensor, clock.clone(), 1000).unwrap();
        (acquirer, clock)
    }

    #[test]
    fn test_sample_period() {
        let (acquirer, _) = acquirer(vec![Ok(0); 4], vec![0; 4]);
        assert_eq!(acquirer.sample_period(), Duration::from_micros(1000));
    }

    #[test]
    fn test_zero_rate_is_rejected() {
        let clock = FakeClock::default();
        let sensor = ScriptedSensor {
            clock: clock.now_us.clone(),
            readings: Vec::new(),
            costs_us: Vec::new(),
            index: 0,
        };
        let result = SampleAcquirer::<_, _, 4>::new(sensor, clock, 0);
        assert_eq!(result.err(), Some(SetupError::InvalidSampleRate(0)));
    }

    #[test]
    fn test_waits_out_each_slot() {
        let (mut acquirer, clock) = acquirer(vec![Ok(10), Ok(20), Ok(30), Ok(40)], vec![100; 4]);

        let buffer = acquirer.acquire();
        let amplitudes: Vec<f32> = buffer.as_slice().iter().map(|s| s.re).collect();
        assert_eq!(amplitudes, [10.0, 20.0, 30.0, 40.0]);
        assert!(buffer.as_slice().iter().all(|s| s.im == 0.0));

        assert_eq!(*clock.delays_us.borrow(), [800, 900, 900]);
        assert_eq!(clock.now_us.get(), 3000);
    }

    #[test]
    fn test_overrun_is_not_caught_up() {
        let (mut acquirer, clock) =
            acquirer(vec![Ok(1); 4], vec![100, 1500, 100, 100]);

        acquirer.acquire();

        // Slot 1 is missed entirely; slots 2 and 3 stay anchored to the start.
        assert_eq!(*clock.delays_us.borrow(), [300, 900]);
        assert_eq!(clock.now_us.get(), 3000);
    }

    #[test]
    fn test_failed_read_is_zero() {
        let (mut acquirer, _) = acquirer(vec![Ok(7), Err(()), Ok(9), Err(())], vec![0; 4]);

        let amplitudes: Vec<f32> = acquirer.acquire().as_slice().iter().map(|s| s.re).collect();
        assert_eq!(amplitudes, [7.0, 0.0, 9.0, 0.0]);
    }

    #[test]
    fn test_buffer_is_reused() {
        let (mut acquirer, _) = acquirer(vec![Ok(5); 4], vec![0; 4]);
        let first = acquirer.acquire().as_slice().as_ptr();
        assert_eq!(acquirer.buffer().as_slice().as_ptr(), first);
    }
}
