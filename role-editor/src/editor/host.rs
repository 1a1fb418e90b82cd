//! Host seam: where a finished editing session goes

use shared::models::RolePayload;

/// Receiver of the two terminal transitions of an editor
pub trait EditorHost {
    /// Called once per successful save with the serialized draft
    fn on_save(&mut self, role: RolePayload);

    /// Called when the draft is discarded
    fn on_cancel(&mut self);
}

/// Host built from two closures
pub struct CallbackHost<S, C> {
    on_save: S,
    on_cancel: C,
}

impl<S, C> CallbackHost<S, C>
where
    S: FnMut(RolePayload),
    C: FnMut(),
{
    pub fn new(on_save: S, on_cancel: C) -> Self {
        Self { on_save, on_cancel }
    }
}

impl<S, C> EditorHost for CallbackHost<S, C>
where
    S: FnMut(RolePayload),
    C: FnMut(),
{
    fn on_save(&mut self, role: RolePayload) {
        (self.on_save)(role)
    }

    fn on_cancel(&mut self) {
        (self.on_cancel)()
    }
}
