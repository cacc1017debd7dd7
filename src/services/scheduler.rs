// ============================================================================
// SCHEDULER - Temporizadores inyectables
// ============================================================================
// En el navegador se usan timeouts de gloo_timers; en los tests una cola
// manual que se vacía de forma determinista.
// ============================================================================

#[cfg(test)]
use std::cell::RefCell;
#[cfg(test)]
use std::collections::VecDeque;
#[cfg(test)]
use std::rc::Rc;
use gloo_timers::callback::Timeout;

pub type Task = Box<dyn FnOnce()>;

pub trait Scheduler {
    /// Ejecutar `task` dentro de `delay_ms` milisegundos
    fn schedule(&self, delay_ms: u32, task: Task);
}

/// Scheduler del navegador (setTimeout)
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserScheduler;

impl Scheduler for BrowserScheduler {
    fn schedule(&self, delay_ms: u32, task: Task) {
        // El timeout se autolibera tras dispararse; no hay cancelación
        Timeout::new(delay_ms, task).forget();
    }
}

/// Cola manual: las tareas se ejecutan solo al llamar `run_next`/`run_until_idle`
#[cfg(test)]
#[derive(Clone, Default)]
pub struct ManualScheduler {
    queue: Rc<RefCell<VecDeque<(u32, Task)>>>,
    elapsed_ms: Rc<RefCell<u64>>,
}

#[cfg(test)]
impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pending(&self) -> usize {
        self.queue.borrow().len()
    }

    /// Tiempo simulado acumulado (suma de los delays ejecutados)
    pub fn elapsed_ms(&self) -> u64 {
        *self.elapsed_ms.borrow()
    }

    /// Ejecuta la siguiente tarea en orden FIFO. Devuelve `false` si no había.
    pub fn run_next(&self) -> bool {
        // Liberar el borrow antes de ejecutar: la tarea puede reprogramarse
        let next = self.queue.borrow_mut().pop_front();
        match next {
            Some((delay_ms, task)) => {
                *self.elapsed_ms.borrow_mut() += u64::from(delay_ms);
                task();
                true
            }
            None => false,
        }
    }

    /// Ejecuta tareas hasta vaciar la cola; devuelve cuántas se ejecutaron
    pub fn run_until_idle(&self) -> usize {
        let mut ran = 0;
        while self.run_next() {
            ran += 1;
        }
        ran
    }
}

#[cfg(test)]
impl Scheduler for ManualScheduler {
    fn schedule(&self, delay_ms: u32, task: Task) {
        self.queue.borrow_mut().push_back((delay_ms, task));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manual_scheduler_runs_rescheduled_tasks() {
        let scheduler = ManualScheduler::new();
        let hits = Rc::new(RefCell::new(0));

        let inner_scheduler = scheduler.clone();
        let inner_hits = hits.clone();
        scheduler.schedule(10, Box::new(move || {
            *inner_hits.borrow_mut() += 1;
            let hits = inner_hits.clone();
            inner_scheduler.schedule(20, Box::new(move || {
                *hits.borrow_mut() += 1;
            }));
        }));

        assert_eq!(scheduler.pending(), 1);
        assert_eq!(scheduler.run_until_idle(), 2);
        assert_eq!(*hits.borrow(), 2);
        assert_eq!(scheduler.elapsed_ms(), 30);
    }
}
