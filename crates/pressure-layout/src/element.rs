#![forbid(unsafe_code)]

//! The element contract: anything with a readable width and height.

use std::rc::Rc;
use std::sync::Arc;

use pressure_core::geometry::{Rect, Size};

use crate::error::{Axis, InvalidElementError};

/// An externally owned object that a leaf wraps.
///
/// The layout reads `width` and `height` once, when the element is adopted,
/// and never touches the element again. `None` means the element has no
/// readable value for that axis.
pub trait Element {
    fn width(&self) -> Option<f64>;
    fn height(&self) -> Option<f64>;
}

impl Element for Size {
    fn width(&self) -> Option<f64> {
        Some(self.width)
    }

    fn height(&self) -> Option<f64> {
        Some(self.height)
    }
}

/// A rectangle contributes its size; its position is ignored.
impl Element for Rect {
    fn width(&self) -> Option<f64> {
        Some(self.width)
    }

    fn height(&self) -> Option<f64> {
        Some(self.height)
    }
}

impl Element for (f64, f64) {
    fn width(&self) -> Option<f64> {
        Some(self.0)
    }

    fn height(&self) -> Option<f64> {
        Some(self.1)
    }
}

impl<T: Element + ?Sized> Element for &T {
    fn width(&self) -> Option<f64> {
        (**self).width()
    }

    fn height(&self) -> Option<f64> {
        (**self).height()
    }
}

impl<T: Element + ?Sized> Element for Box<T> {
    fn width(&self) -> Option<f64> {
        (**self).width()
    }

    fn height(&self) -> Option<f64> {
        (**self).height()
    }
}

impl<T: Element + ?Sized> Element for Rc<T> {
    fn width(&self) -> Option<f64> {
        (**self).width()
    }

    fn height(&self) -> Option<f64> {
        (**self).height()
    }
}

impl<T: Element + ?Sized> Element for Arc<T> {
    fn width(&self) -> Option<f64> {
        (**self).width()
    }

    fn height(&self) -> Option<f64> {
        (**self).height()
    }
}

/// Resolve an element's intrinsic size, preferring explicit overrides.
pub(crate) fn measure<E: Element + ?Sized>(
    element: &E,
    width: Option<f64>,
    height: Option<f64>,
) -> Result<Size, InvalidElementError> {
    let width = checked(Axis::Width, width.or_else(|| element.width()))?;
    let height = checked(Axis::Height, height.or_else(|| element.height()))?;
    Ok(Size::new(width, height))
}

fn checked(axis: Axis, value: Option<f64>) -> Result<f64, InvalidElementError> {
    match value {
        None => Err(InvalidElementError::missing(axis)),
        Some(v) if !v.is_finite() || v < 0.0 => Err(InvalidElementError::rejected(axis, v)),
        Some(v) => Ok(v),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Label {
        width: Option<f64>,
    }

    impl Element for Label {
        fn width(&self) -> Option<f64> {
            self.width
        }

        fn height(&self) -> Option<f64> {
            None
        }
    }

    #[test]
    fn measure_reads_element() {
        assert_eq!(measure(&(3.0, 4.0), None, None), Ok(Size::new(3.0, 4.0)));
        assert_eq!(
            measure(&Rect::new(9.0, 9.0, 1.0, 2.0), None, None),
            Ok(Size::new(1.0, 2.0))
        );
    }

    #[test]
    fn overrides_win() {
        let label = Label { width: Some(10.0) };
        assert_eq!(measure(&label, None, Some(7.0)), Ok(Size::new(10.0, 7.0)));
        assert_eq!(measure(&label, Some(2.0), Some(7.0)), Ok(Size::new(2.0, 7.0)));
    }

    #[test]
    fn missing_axis_is_rejected() {
        let label = Label { width: None };
        assert_eq!(
            measure(&label, None, Some(1.0)),
            Err(InvalidElementError::missing(Axis::Width))
        );
        let label = Label { width: Some(1.0) };
        assert_eq!(
            measure(&label, None, None),
            Err(InvalidElementError::missing(Axis::Height))
        );
    }

    #[test]
    fn bad_values_are_rejected() {
        let err = measure(&(f64::INFINITY, 1.0), None, None).unwrap_err();
        assert_eq!(err.axis, Axis::Width);
        let err = measure(&(1.0, -1.0), None, None).unwrap_err();
        assert_eq!(err, InvalidElementError::rejected(Axis::Height, -1.0));
    }

    #[test]
    fn zero_size_is_valid() {
        assert_eq!(measure(&Size::ZERO, None, None), Ok(Size::ZERO));
    }

    #[test]
    fn smart_pointers_forward() {
        let shared = Rc::new((2.0, 3.0));
        assert_eq!(shared.width(), Some(2.0));
        let boxed: Box<dyn Element> = Box::new(Size::new(5.0, 6.0));
        assert_eq!(boxed.height(), Some(6.0));
        assert_eq!(Arc::new(Size::new(1.0, 1.0)).width(), Some(1.0));
    }
}
