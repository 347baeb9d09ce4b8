// tests/cycle.rs
//
// End-to-end run against scripted collaborators: the startup phase blocks
// until the simulated association arrives, then the steady state performs
// exactly one read/build/upload/sleep per simulated 60-second tick.

use std::{cell::RefCell, rc::Rc, time::Duration};

use poolmon::*;

struct PoolProbe {
    temps: Vec<f32>,
    next: usize,
}

impl TempSensor for PoolProbe {
    fn read(&mut self) -> Reading {
        let c = self.temps[self.next % self.temps.len()];
        self.next += 1;
        Reading::from_celsius(c)
    }
}

struct Router {
    up_after_polls: u32,
    polls: u32,
}

impl Network for Router {
    fn begin(&mut self) -> anyhow::Result<()> {
        Ok(())
    }

    fn is_connected(&mut self) -> bool {
        let up = self.polls >= self.up_after_polls;
        self.polls += 1;
        up
    }
}

struct Cloud {
    bodies: Rc<RefCell<Vec<String>>>,
}

impl Uploader for Cloud {
    fn post(&mut self, _url: &str, body: &str) -> Result<HttpResponse, UploadError> {
        self.bodies.borrow_mut().push(body.to_string());
        Ok(HttpResponse {
            status: 200,
            body: "OK".into(),
        })
    }
}

struct Blinker;

impl Indicator for Blinker {
    fn toggle(&mut self) {}
    fn set(&mut self, _on: bool) {}
}

struct Ticker {
    slept: Rc<RefCell<Vec<Duration>>>,
}

impl Delay for Ticker {
    fn sleep(&mut self, duration: Duration) {
        self.slept.borrow_mut().push(duration);
    }
}

#[test]
fn startup_then_one_upload_per_tick() {
    let bodies = Rc::new(RefCell::new(Vec::new()));
    let slept = Rc::new(RefCell::new(Vec::new()));

    let mut monitor = Monitor::new(
        Config::default(),
        PoolProbe {
            temps: vec![21.5, 22.0, 22.5],
            next: 0,
        },
        Router {
            up_after_polls: 4,
            polls: 0,
        },
        Cloud {
            bodies: bodies.clone(),
        },
        Blinker,
        Ticker {
            slept: slept.clone(),
        },
    );

    monitor.connect().unwrap();

    // startup blocked across four association polls, 500ms apart
    assert_eq!(*slept.borrow(), vec![Duration::from_millis(500); 4]);
    assert!(bodies.borrow().is_empty());

    for tick in 1..=3usize {
        assert_eq!(monitor.run_cycle(), CycleOutcome::Uploaded(200));
        assert_eq!(bodies.borrow().len(), tick);
    }

    // exactly one 60-second sleep per steady-state tick
    assert_eq!(slept.borrow()[4..], vec![Duration::from_secs(60); 3]);

    // each tick shipped that tick's reading
    let doc: serde_json::Value = serde_json::from_str(&bodies.borrow()[2]).unwrap();
    assert_eq!(doc["device_id"], "pool-monitor-01");
    assert!((doc["temperature_c"].as_f64().unwrap() - 22.5).abs() < 1e-2);
}

#[test]
fn sensor_dropout_recovers_on_a_later_tick() {
    let bodies = Rc::new(RefCell::new(Vec::new()));
    let slept = Rc::new(RefCell::new(Vec::new()));

    let mut monitor = Monitor::new(
        Config::default(),
        PoolProbe {
            temps: vec![DISCONNECTED_C, DISCONNECTED_C, 24.0],
            next: 0,
        },
        Router {
            up_after_polls: 0,
            polls: 0,
        },
        Cloud {
            bodies: bodies.clone(),
        },
        Blinker,
        Ticker {
            slept: slept.clone(),
        },
    );

    monitor.connect().unwrap();

    assert_eq!(monitor.run_cycle(), CycleOutcome::SensorInvalid);
    assert_eq!(monitor.run_cycle(), CycleOutcome::SensorInvalid);
    assert!(bodies.borrow().is_empty());
    // the short retry delay, not the report interval
    assert_eq!(*slept.borrow(), vec![Duration::from_secs(2); 2]);

    assert_eq!(monitor.run_cycle(), CycleOutcome::Uploaded(200));
    assert_eq!(bodies.borrow().len(), 1);
}

// EOF
