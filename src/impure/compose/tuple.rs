use super::TryCompose as TryComposeTrait;
use crate::impure::{AndThen, TryTransform};

impl<I, A> TryComposeTrait<I> for (A,)
where
    A: TryTransform<I>,
{
    type Output = A::Output;
    type Error = A::Error;
    type Transform = A;

    fn try_compose(self) -> Self::Transform {
        self.0
    }
}

/// Implements `TryCompose` for a tuple by composing its prefix, then
/// appending the last stage.
macro_rules! impl_try_compose_tuple {
    ($($F:ident)+ ; $Last:ident) => {
        impl<I, $($F,)+ $Last> TryComposeTrait<I> for ($($F,)+ $Last,)
        where
            ($($F,)+): TryComposeTrait<I>,
            $Last: TryTransform<
                <($($F,)+) as TryComposeTrait<I>>::Output,
                Error = <($($F,)+) as TryComposeTrait<I>>::Error,
            >,
        {
            type Output =
                <$Last as TryTransform<<($($F,)+) as TryComposeTrait<I>>::Output>>::Output;
            type Error = <($($F,)+) as TryComposeTrait<I>>::Error;
            type Transform = AndThen<<($($F,)+) as TryComposeTrait<I>>::Transform, $Last>;

            fn try_compose(self) -> Self::Transform {
                let ($($F,)+ $Last,) = self;
                AndThen::new(($($F,)+).try_compose(), $Last)
            }
        }
    };
}

impl_try_compose_tuple! { A ; B }
impl_try_compose_tuple! { A B ; C }
impl_try_compose_tuple! { A B C ; D }
impl_try_compose_tuple! { A B C D ; E }
impl_try_compose_tuple! { A B C D E ; F }
impl_try_compose_tuple! { A B C D E F ; G }
impl_try_compose_tuple! { A B C D E F G ; H }
impl_try_compose_tuple! { A B C D E F G H ; J }
impl_try_compose_tuple! { A B C D E F G H J ; K }
impl_try_compose_tuple! { A B C D E F G H J K ; L }
impl_try_compose_tuple! { A B C D E F G H J K L ; M }
