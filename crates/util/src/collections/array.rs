use std::ops::{Deref, DerefMut, Index, IndexMut};

/// A heap allocated slice whose length is fixed when it is created.
#[derive(Clone, Debug)]
#[repr(transparent)]
pub struct Array<T> {
    inner: Box<[T]>,
}

impl<T> Array<T> {
    /// Allocate `len` slots, each initialized with `init()`.
    pub fn new(len: usize, init: impl FnMut() -> T) -> Self {
        let mut inner = Vec::with_capacity(len);
        inner.resize_with(len, init);
        Self {
            inner: inner.into_boxed_slice(),
        }
    }

    pub fn as_slice(&self) -> &[T] {
        self
    }

    pub fn as_mut_slice(&mut self) -> &mut [T] {
        self
    }
}

impl<T> From<Vec<T>> for Array<T> {
    fn from(value: Vec<T>) -> Self {
        Self {
            inner: value.into_boxed_slice(),
        }
    }
}

impl<T> Deref for Array<T> {
    type Target = [T];
    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl<T> DerefMut for Array<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.inner
    }
}

impl<Idx, T> Index<Idx> for Array<T>
where
    Idx: TryInto<usize>,
{
    type Output = T;
    fn index(&self, index: Idx) -> &Self::Output {
        &self.inner[crate::cast_usize!(index)]
    }
}

impl<Idx, T> IndexMut<Idx> for Array<T>
where
    Idx: TryInto<usize>,
{
    fn index_mut(&mut self, index: Idx) -> &mut Self::Output {
        &mut self.inner[crate::cast_usize!(index)]
    }
}
