// ============================================================================
// COUNTER VIEWMODEL - Animación numérica 0 -> objetivo
// ============================================================================
// El paso es una función pura; el ritmo lo pone un Scheduler inyectado.
// Cada contador es independiente y se detiene solo al llegar al objetivo.
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;
use crate::services::scheduler::Scheduler;
use crate::utils::CURRENCY_MARKER;

/// Cómo se muestra el valor en pantalla
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CounterFormat {
    /// `R$ <n>M`
    Monetary,
    Plain,
}

impl CounterFormat {
    /// Monetario si el texto original contiene "R$"
    pub fn detect(original_text: &str) -> Self {
        if original_text.contains(CURRENCY_MARKER) {
            CounterFormat::Monetary
        } else {
            CounterFormat::Plain
        }
    }

    pub fn render(&self, value: f64) -> String {
        let whole = value.floor() as i64;
        match self {
            CounterFormat::Monetary => format!("R$ {}M", whole),
            CounterFormat::Plain => whole.to_string(),
        }
    }
}

/// Lee el atributo `data-target` como lo haría `parseInt`: espacios
/// iniciales, signo opcional y los dígitos del principio. El resto se ignora.
pub fn parse_target(raw: &str) -> Option<i64> {
    let trimmed = raw.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let digits: &str = {
        let end = rest
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(rest.len());
        &rest[..end]
    };
    if digits.is_empty() {
        return None;
    }

    let value: i64 = digits.parse().ok()?;
    Some(if negative { -value } else { value })
}

/// Un paso del contador. Al alcanzar o pasar el objetivo se fija en él.
pub fn next_value(current: f64, target: f64, increment: f64) -> f64 {
    let next = current + increment;
    if next >= target {
        target
    } else {
        next
    }
}

#[derive(Debug, Clone)]
pub struct CounterAnimation {
    target: f64,
    increment: f64,
    current: f64,
    format: CounterFormat,
    finished: bool,
}

impl CounterAnimation {
    pub fn new(target: i64, format: CounterFormat, steps: u32) -> Self {
        let target = target as f64;
        Self {
            target,
            increment: target / f64::from(steps.max(1)),
            current: 0.0,
            format,
            finished: false,
        }
    }

    /// Avanza un tick y devuelve el texto a mostrar
    pub fn tick(&mut self) -> String {
        if !self.finished {
            self.current = next_value(self.current, self.target, self.increment);
            self.finished = self.current >= self.target;
        }
        self.format.render(self.current)
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    pub fn current(&self) -> f64 {
        self.current
    }
}

/// Arranca la animación: un tick cada `tick_ms` hasta terminar.
/// `render` recibe el texto de cada tick (incluido el final).
pub fn run_counter<F>(
    scheduler: Rc<dyn Scheduler>,
    tick_ms: u32,
    animation: CounterAnimation,
    render: F,
) where
    F: FnMut(&str) + 'static,
{
    let state = Rc::new(RefCell::new((animation, render)));
    schedule_tick(scheduler, tick_ms, state);
}

fn schedule_tick<F>(
    scheduler: Rc<dyn Scheduler>,
    tick_ms: u32,
    state: Rc<RefCell<(CounterAnimation, F)>>,
) where
    F: FnMut(&str) + 'static,
{
    let next_scheduler = scheduler.clone();
    scheduler.schedule(
        tick_ms,
        Box::new(move || {
            let finished = {
                let mut guard = state.borrow_mut();
                let (animation, render) = &mut *guard;
                let text = animation.tick();
                render(&text);
                animation.is_finished()
            };
            if !finished {
                schedule_tick(next_scheduler, tick_ms, state);
            }
        }),
    );
}
