/// Declares a message-carrying error kind implementing [`AppError`](crate::fault::AppError).
///
/// ```
/// fl_core::message_error! {
///     /// Raised when a request payload is rejected
///     pub BadRequestError
/// }
///
/// let err = BadRequestError::new("missing field");
/// assert_eq!(err.to_string(), "missing field");
/// ```
#[macro_export]
macro_rules! message_error {
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default, PartialEq, Eq)]
        $vis struct $name {
            message: ::std::string::String,
        }

        impl $name {
            pub fn new(message: impl ::std::convert::Into<::std::string::String>) -> Self {
                Self { message: message.into() }
            }

            pub fn message(&self) -> &str {
                &self.message
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(&self.message)
            }
        }

        impl ::std::error::Error for $name {}

        impl $crate::fault::AppError for $name {
            fn from_message(message: ::std::string::String) -> Self {
                Self { message }
            }
        }
    };
}
