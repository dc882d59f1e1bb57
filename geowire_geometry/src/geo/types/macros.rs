// Common impls for the geometry containers. All containers are a `Vec` of
// elements plus memoized derived state; equality and `Debug` look only at the
// elements, and `Clone` starts with fresh caches.
#[macro_export]
macro_rules! impl_container {
	($t:ident, $item:ident, $field:ident) => {
		impl<C> Clone for $t<C> {
			fn clone(&self) -> Self {
				Self::new(self.$field.clone())
			}
		}

		impl<C> PartialEq for $t<C> {
			fn eq(&self, other: &Self) -> bool {
				self.$field == other.$field
			}
		}

		impl<C> std::fmt::Debug for $t<C> {
			fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
				f.debug_list().entries(&self.$field).finish()
			}
		}

		impl<C> From<Vec<$item<C>>> for $t<C> {
			fn from(value: Vec<$item<C>>) -> Self {
				Self::new(value)
			}
		}

		impl<C> FromIterator<$item<C>> for $t<C> {
			fn from_iter<I: IntoIterator<Item = $item<C>>>(iter: I) -> Self {
				Self::new(iter.into_iter().collect())
			}
		}
	};
}
