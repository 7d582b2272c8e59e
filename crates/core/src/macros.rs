//! `value_record!`: declare an immutable record and generate its contract.

/// Declare a value record.
///
/// Generates the struct (private fields, derived `Debug`, `Clone`, `PartialEq`,
/// `Eq`, `Hash`), its [`ValueObject`](crate::ValueObject) and
/// [`Record`](crate::Record) impls, `Display`, and a typed API:
///
/// - `new(..)` taking every field in declaration order,
/// - a borrowing getter per field,
/// - `with_<field>(&self, value)` returning an updated copy,
/// - `into_parts(self)` returning the fields as a tuple.
///
/// A field may declare a default (`x: Real = 0.0`), used by
/// [`Record::construct`](crate::Record::construct) and
/// [`Record::copy_with`](crate::Record::copy_with) when the field is not
/// named. Default expressions are evaluated on every use.
///
/// An optional `validate = path;` clause names a
/// `fn(&Self) -> DomainResult<()>`. With a validator, `new` and `with_*`
/// return `DomainResult<Self>`; without one they are infallible.
///
/// Attributes on the struct are forwarded, so serde derives can be added by
/// the caller.
///
/// ```ignore
/// value_record! {
///     #[derive(Serialize, Deserialize)]
///     pub struct Person {
///         name: String,
///         age: i32,
///     }
///     validate = check_person;
/// }
/// ```
#[macro_export]
macro_rules! value_record {
    (@required) => { true };
    (@required $default:expr) => { false };

    (@default $record:expr, $field:ident) => {
        return ::core::result::Result::Err($crate::DomainError::arity($record, stringify!($field)))
    };
    (@default $record:expr, $field:ident, $default:expr) => {
        ::core::convert::Into::into($default)
    };

    (@validate) => {};
    (@validate $validator:path) => {
        fn validate(&self) -> $crate::DomainResult<()> {
            $validator(self)
        }
    };

    (@accessors $name:ident { $($field:ident : $ty:ty),+ }) => {
        $(
            pub fn $field(&self) -> &$ty {
                &self.$field
            }
        )+

        /// Positional destructuring, in declaration order.
        pub fn into_parts(self) -> ($($ty,)+) {
            ($(self.$field,)+)
        }
    };

    (@typed [] $name:ident { $($field:ident : $ty:ty),+ }) => {
        impl $name {
            #[allow(clippy::too_many_arguments)]
            pub fn new($($field: impl ::core::convert::Into<$ty>),+) -> Self {
                Self {
                    $($field: $field.into(),)+
                }
            }

            $crate::value_record!(@accessors $name { $($field : $ty),+ });

            $crate::__private::paste::paste! {
                $(
                    pub fn [<with_ $field>](&self, $field: impl ::core::convert::Into<$ty>) -> Self {
                        Self {
                            $field: $field.into(),
                            ..::core::clone::Clone::clone(self)
                        }
                    }
                )+
            }
        }
    };

    (@typed [$validator:path] $name:ident { $($field:ident : $ty:ty),+ }) => {
        impl $name {
            #[allow(clippy::too_many_arguments)]
            pub fn new($($field: impl ::core::convert::Into<$ty>),+) -> $crate::DomainResult<Self> {
                let instance = Self {
                    $($field: $field.into(),)+
                };
                $validator(&instance)?;
                ::core::result::Result::Ok(instance)
            }

            $crate::value_record!(@accessors $name { $($field : $ty),+ });

            $crate::__private::paste::paste! {
                $(
                    pub fn [<with_ $field>](
                        &self,
                        $field: impl ::core::convert::Into<$ty>,
                    ) -> $crate::DomainResult<Self> {
                        let instance = Self {
                            $field: $field.into(),
                            ..::core::clone::Clone::clone(self)
                        };
                        $validator(&instance)?;
                        ::core::result::Result::Ok(instance)
                    }
                )+
            }
        }
    };

    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident {
            $(
                $(#[$fmeta:meta])*
                $field:ident : $ty:ty $(= $default:expr)?
            ),+ $(,)?
        }
        $(validate = $validator:path;)?
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        $vis struct $name {
            $(
                $(#[$fmeta])*
                $field: $ty,
            )+
        }

        impl $crate::ValueObject for $name {}

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                $crate::record::fmt_record(
                    f,
                    <Self as $crate::Record>::TYPE_NAME,
                    &$crate::Record::field_values(self),
                )
            }
        }

        impl $crate::Record for $name {
            const TYPE_NAME: &'static str = stringify!($name);

            fn schema() -> &'static [$crate::FieldSpec] {
                const SCHEMA: &[$crate::FieldSpec] = &[
                    $(
                        $crate::FieldSpec {
                            name: stringify!($field),
                            kind: <$ty as $crate::FieldType>::KIND,
                            required: $crate::value_record!(@required $($default)?),
                        },
                    )+
                ];
                SCHEMA
            }

            fn field_values(&self) -> ::std::vec::Vec<(&'static str, $crate::FieldValue)> {
                ::std::vec![
                    $((stringify!($field), $crate::FieldType::to_value(&self.$field)),)+
                ]
            }

            fn from_fields(mut fields: $crate::Fields) -> $crate::DomainResult<Self> {
                $(
                    let $field: $ty = match fields.take(stringify!($field)) {
                        ::core::option::Option::Some(value) => {
                            <$ty as $crate::FieldType>::from_value(
                                <Self as $crate::Record>::TYPE_NAME,
                                stringify!($field),
                                value,
                            )?
                        }
                        ::core::option::Option::None => {
                            $crate::value_record!(
                                @default <Self as $crate::Record>::TYPE_NAME, $field $(, $default)?
                            )
                        }
                    };
                )+
                ::core::result::Result::Ok(Self { $($field,)+ })
            }

            $crate::value_record!(@validate $($validator)?);
        }

        $crate::value_record!(@typed [$($validator)?] $name { $($field : $ty),+ });
    };
}
