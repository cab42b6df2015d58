use std::ops::{Deref, DerefMut};


// Runs `on_scope_end` against the wrapped value when dropped, unless dismissed first.
pub struct Janitor<T, F>
where
    T: DerefMut,
    F: for<'a> FnOnce(&'a mut T::Target),
{
    value: T,
    on_scope_end: Option<F>,
}

impl<T, F> Janitor<T, F>
where
    T: DerefMut,
    F: for<'a> FnOnce(&'a mut T::Target),
{
    pub fn new(value: T, on_scope_end: F) -> Self {
        Self { value, on_scope_end: Some(on_scope_end) }
    }

    // Keeps the changes made through the janitor.
    pub fn dismiss(mut self) { self.on_scope_end = None; }
}

impl<T, F> Deref for Janitor<T, F>
where
    T: DerefMut,
    F: for<'a> FnOnce(&'a mut T::Target),
{
    type Target = T::Target;

    fn deref(&self) -> &Self::Target { self.value.deref() }
}

impl<T, F> DerefMut for Janitor<T, F>
where
    T: DerefMut,
    F: for<'a> FnOnce(&'a mut T::Target),
{
    fn deref_mut(&mut self) -> &mut Self::Target { self.value.deref_mut() }
}

impl<T, F> Drop for Janitor<T, F>
where
    T: DerefMut,
    F: for<'a> FnOnce(&'a mut T::Target),
{
    fn drop(&mut self) {
        if let Some(on_scope_end) = self.on_scope_end.take() {
            on_scope_end(self.value.deref_mut());
        }
    }
}
