use super::Compose as ComposeTrait;
use crate::pure::{Then, Transform};

impl<I, A> ComposeTrait<I> for (A,)
where
    A: Transform<I>,
{
    type Output = A::Output;
    type Transform = A;

    fn compose(self) -> Self::Transform {
        self.0
    }
}

/// Implements `Compose` for a tuple by composing its prefix, then appending
/// the last stage.
macro_rules! impl_compose_tuple {
    ($($F:ident)+ ; $Last:ident) => {
        impl<I, $($F,)+ $Last> ComposeTrait<I> for ($($F,)+ $Last,)
        where
            ($($F,)+): ComposeTrait<I>,
            $Last: Transform<<($($F,)+) as ComposeTrait<I>>::Output>,
        {
            type Output = <$Last as Transform<<($($F,)+) as ComposeTrait<I>>::Output>>::Output;
            type Transform = Then<<($($F,)+) as ComposeTrait<I>>::Transform, $Last>;

            fn compose(self) -> Self::Transform {
                let ($($F,)+ $Last,) = self;
                Then::new(($($F,)+).compose(), $Last)
            }
        }
    };
}

impl_compose_tuple! { A ; B }
impl_compose_tuple! { A B ; C }
impl_compose_tuple! { A B C ; D }
impl_compose_tuple! { A B C D ; E }
impl_compose_tuple! { A B C D E ; F }
impl_compose_tuple! { A B C D E F ; G }
impl_compose_tuple! { A B C D E F G ; H }
impl_compose_tuple! { A B C D E F G H ; J }
impl_compose_tuple! { A B C D E F G H J ; K }
impl_compose_tuple! { A B C D E F G H J K ; L }
impl_compose_tuple! { A B C D E F G H J K L ; M }
