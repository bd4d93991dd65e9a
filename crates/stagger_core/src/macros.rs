/// Implements a binary operator for the owned and borrowed operand
/// combinations in terms of the `&T op &U` impl.
macro_rules! forward_binop {
    (impl $imp:ident, $method:ident for $t:ty, $u:ty => $out:ty) => {
        impl $imp<$u> for $t {
            type Output = $out;
            fn $method(self, rhs: $u) -> $out {
                $imp::$method(&self, &rhs)
            }
        }

        impl $imp<&$u> for $t {
            type Output = $out;
            fn $method(self, rhs: &$u) -> $out {
                $imp::$method(&self, rhs)
            }
        }

        impl $imp<$u> for &$t {
            type Output = $out;
            fn $method(self, rhs: $u) -> $out {
                $imp::$method(self, &rhs)
            }
        }
    };
}

/// Mixed operations with a scalar, which is first converted with `From`.
macro_rules! forward_scalar_binop {
    (impl $imp:ident, $method:ident for $t:ty, $s:ty => $out:ty) => {
        impl $imp<$s> for &$t {
            type Output = $out;
            fn $method(self, rhs: $s) -> $out {
                $imp::$method(self, &<$t>::from(rhs))
            }
        }

        impl $imp<$s> for $t {
            type Output = $out;
            fn $method(self, rhs: $s) -> $out {
                $imp::$method(&self, &<$t>::from(rhs))
            }
        }

        impl $imp<&$t> for $s {
            type Output = $out;
            fn $method(self, rhs: &$t) -> $out {
                $imp::$method(&<$t>::from(self), rhs)
            }
        }

        impl $imp<$t> for $s {
            type Output = $out;
            fn $method(self, rhs: $t) -> $out {
                $imp::$method(&<$t>::from(self), &rhs)
            }
        }
    };
}

/// `op=` in terms of the owned binary operator.
macro_rules! forward_assign_op {
    (impl $imp:ident, $method:ident for $t:ty, $u:ty, $op:tt) => {
        impl $imp<$u> for $t {
            fn $method(&mut self, rhs: $u) {
                *self = &*self $op rhs;
            }
        }
    };
}
