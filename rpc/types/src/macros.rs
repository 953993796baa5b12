//! Macros.

//---------------------------------------------------------------------------------------------------- define_request_and_response
/// A template for generating the RPC request and response `struct`s.
///
/// These `struct`s automatically implement:
/// - `Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash`
/// - `serde::{Serialize, Deserialize}`, with `#[serde(default)]`
///
/// and the request type implements [`crate::RpcCall`],
/// answered by the response type.
///
/// See the [`crate::wallet`] module for example usage.
///
/// # Empty types
/// Unlike the fields, the `{}` must always be given.
/// `Request {}` generates an empty `struct`, not `()`,
/// so that every method has its own distinct request type
/// that [`crate::RpcCall`] can be implemented on.
macro_rules! define_request_and_response {
    (
        // The method name used on the wire, e.g. `"list_unspent"`.
        $method:literal,

        // The base `struct` name.
        // Attributes added here will apply to _both_
        // request and response types.
        $( #[$type_attr:meta] )*
        $type_name:ident,

        // The request type (and any doc comments, derives, etc).
        $( #[$request_type_attr:meta] )*
        Request {
            // And any fields.
            $(
                $( #[$request_field_attr:meta] )*
                $request_field:ident: $request_field_type:ty,
            )*
        },

        // The response type (and any doc comments, derives, etc).
        $( #[$response_type_attr:meta] )*
        Response {
            // And any fields.
            $(
                $( #[$response_field_attr:meta] )*
                $response_field:ident: $response_field_type:ty,
            )*
        }
    ) => { paste::paste! {
        $crate::macros::__define_type! {
            #[doc = $crate::macros::__define_request_and_response_doc!(
                $method,
                "response" => [<$type_name Response>],
            )]
            ///
            $( #[$type_attr] )*
            ///
            $( #[$request_type_attr] )*
            [<$type_name Request>] {
                $(
                    $( #[$request_field_attr] )*
                    $request_field: $request_field_type,
                )*
            }
        }

        $crate::macros::__define_type! {
            #[doc = $crate::macros::__define_request_and_response_doc!(
                $method,
                "request" => [<$type_name Request>],
            )]
            ///
            $( #[$type_attr] )*
            ///
            $( #[$response_type_attr] )*
            [<$type_name Response>] {
                $(
                    $( #[$response_field_attr] )*
                    $response_field: $response_field_type,
                )*
            }
        }

        impl $crate::RpcCall for [<$type_name Request>] {
            const METHOD: &'static str = $method;
            type Response = [<$type_name Response>];
        }
    }};
}
pub(crate) use define_request_and_response;

//---------------------------------------------------------------------------------------------------- define_type
/// Define a request or response type.
///
/// This is only used in [`define_request_and_response`], see it for docs.
///
/// `__` is used to notate that this shouldn't be called directly.
macro_rules! __define_type {
    (
        // Any doc comments, derives, etc.
        $( #[$attr:meta] )*
        // The type.
        $t:ident {
            // And any fields.
            $(
                $( #[$field_attr:meta] )* // field attributes
                // field_name: FieldType
                $field:ident: $field_type:ty,
            )*
        }
    ) => {
        #[allow(missing_docs)]
        #[derive(Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
        #[derive(serde::Serialize, serde::Deserialize)]
        #[serde(default)]
        $( #[$attr] )*
        pub struct $t {
            $(
                $( #[$field_attr] )*
                pub $field: $field_type,
            )*
        }
    };
}
pub(crate) use __define_type;

//---------------------------------------------------------------------------------------------------- define_request_and_response_doc
/// Generate documentation for the types generated
/// by the [`define_request_and_response`] macro.
///
/// See it for more info on inputs.
///
/// `__` is used to notate that this shouldn't be called directly.
macro_rules! __define_request_and_response_doc {
    (
        // The wire method name.
        $method:literal,

        // This labels the last `[request]` or `[response]`
        // hyperlink in documentation. Input is either:
        // - "request"
        // - "response"
        //
        // Remember this is linking to the _other_ type,
        // so if defining a `Request` type, input should
        // be "response".
        $request_or_response:literal => $request_or_response_type:ident,
    ) => {
        concat!(
            "Method: `",
            $method,
            "`, [",
            $request_or_response,
            "](",
            stringify!($request_or_response_type),
            ")."
        )
    };
}
pub(crate) use __define_request_and_response_doc;

//---------------------------------------------------------------------------------------------------- define_struct
/// Define a plain data `struct` that appears inside
/// request/response types, with the same derives as them.
///
/// ```ignore
/// define_struct! {
///     /// Docs.
///     TxOut {
///         value: i64,
///     }
/// }
/// ```
macro_rules! define_struct {
    (
        $(
            $( #[$struct_attr:meta] )*
            $struct_name:ident {
                $(
                    $( #[$field_attr:meta] )*
                    $field_name:ident: $field_type:ty,
                )*
            }
        )*
    ) => {
        $(
            $crate::macros::__define_type! {
                $( #[$struct_attr] )*
                $struct_name {
                    $(
                        $( #[$field_attr] )*
                        $field_name: $field_type,
                    )*
                }
            }
        )*
    };
}
pub(crate) use define_struct;
