/// Browser side of reveal-on-scroll: marking and visibility observation.
pub trait RevealHost {
    type Target: Clone + PartialEq;

    fn mark_revealed(&mut self, target: &Self::Target);
    fn observe(&mut self, target: &Self::Target);
    fn unobserve(&mut self, target: &Self::Target);
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealMode {
    /// Reduced motion: everything revealed up front, nothing observed.
    Immediate,
    Observing,
}

/// One-shot hidden -> revealed transitions for a fixed target set.
#[derive(Clone, Debug)]
pub struct RevealController<T> {
    targets: Vec<(T, bool)>,
    mode: RevealMode,
}

impl<T: Clone + PartialEq> RevealController<T> {
    pub fn init<H>(targets: Vec<T>, reduced_motion: bool, host: &mut H) -> Self
    where
        H: RevealHost<Target = T>,
    {
        let mode = if reduced_motion {
            RevealMode::Immediate
        } else {
            RevealMode::Observing
        };
        let targets = targets
            .into_iter()
            .map(|t| {
                match mode {
                    RevealMode::Immediate => host.mark_revealed(&t),
                    RevealMode::Observing => host.observe(&t),
                }
                (t, mode == RevealMode::Immediate)
            })
            .collect::<Vec<_>>();
        log::info!("[reveal] {} targets, mode={:?}", targets.len(), mode);
        Self { targets, mode }
    }

    /// Handle one visibility notification. Returns `true` when this call
    /// revealed the target.
    pub fn on_intersection<H>(&mut self, target: &T, is_intersecting: bool, host: &mut H) -> bool
    where
        H: RevealHost<Target = T>,
    {
        if !is_intersecting {
            return false;
        }
        match self.targets.iter_mut().find(|(t, _)| t == target) {
            Some((t, revealed)) if !*revealed => {
                *revealed = true;
                host.mark_revealed(t);
                host.unobserve(t);
                true
            }
            _ => false,
        }
    }

    #[cfg_attr(target_arch = "wasm32", allow(dead_code))]
    #[inline]
    pub fn mode(&self) -> RevealMode {
        self.mode
    }

    #[cfg_attr(target_arch = "wasm32", allow(dead_code))]
    pub fn is_revealed(&self, target: &T) -> bool {
        self.targets
            .iter()
            .any(|(t, revealed)| *revealed && t == target)
    }

    #[cfg_attr(target_arch = "wasm32", allow(dead_code))]
    pub fn revealed_count(&self) -> usize {
        self.targets.iter().filter(|(_, revealed)| *revealed).count()
    }

    #[cfg_attr(target_arch = "wasm32", allow(dead_code))]
    #[inline]
    pub fn len(&self) -> usize {
        self.targets.len()
    }

    #[cfg_attr(target_arch = "wasm32", allow(dead_code))]
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }
}
