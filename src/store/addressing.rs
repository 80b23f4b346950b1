//! Guest vs authenticated cart addressing.
//!
//! Every cart-bearing request is sent in exactly one of two modes:
//!
//! - [`AddressingMode::Authenticated`]: the caller supplied a token. The
//!   request runs under a context built from that token, `is_guest` is
//!   `false`, and the cart travels as the numeric `cart_id`.
//! - [`AddressingMode::Guest`]: no token. The request runs under the ambient
//!   context, `is_guest` is `true`, and the cart travels as the opaque
//!   `cart_uuid`.
//!
//! A request never carries both identifiers.

use crate::auth::{ClientContext, SessionManager};
use crate::proto::store::{
    CreateCartRequest, DeleteCartItemRequest, GetCartRequest, GetCartTotalsRequest,
    GetShippingInformationRequest, ListPaymentMethodsRequest, ListShippingMethodsRequest,
    UpdateCartRequest,
};
use crate::store::StoreError;

/// Which identity and cart identifier a request uses.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AddressingMode {
    /// Caller-supplied token, numeric cart id.
    Authenticated,
    /// Ambient context, opaque guest cart id.
    Guest,
}

impl AddressingMode {
    /// Returns `true` for [`Guest`](Self::Guest).
    #[must_use]
    pub const fn is_guest(self) -> bool {
        matches!(self, Self::Guest)
    }
}

/// A cart identifier in the form its addressing mode requires.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CartKey {
    /// Numeric id of an authenticated cart.
    Id(i32),
    /// Opaque id of a guest cart.
    Uuid(String),
}

/// The resolved identity and cart identifier for one call.
#[derive(Clone, Debug)]
pub struct Addressing {
    /// The mode in effect.
    pub mode: AddressingMode,
    /// The context the request carries.
    pub context: ClientContext,
    /// The cart identifier, absent for cart creation.
    pub cart: Option<CartKey>,
}

impl Addressing {
    /// Resolves the addressing for a call.
    ///
    /// A non-empty `token` selects [`AddressingMode::Authenticated`] and
    /// requires `cart_id` (when given) to be numeric. Otherwise the ambient
    /// context is used and `cart_id` is taken verbatim as the guest cart id.
    ///
    /// # Errors
    ///
    /// - [`StoreError::NoContext`] when the guest path has no ambient context
    /// - [`StoreError::InvalidField`] when an authenticated cart id is not numeric
    pub async fn resolve(
        sessions: &SessionManager,
        token: Option<&str>,
        cart_id: Option<&str>,
    ) -> Result<Self, StoreError> {
        let addressing = match token.filter(|t| !t.is_empty()) {
            Some(token) => {
                let cart = cart_id.map(parse_cart_id).transpose()?.map(CartKey::Id);
                Self {
                    mode: AddressingMode::Authenticated,
                    context: sessions.context_from_token(token),
                    cart,
                }
            }
            None => Self {
                mode: AddressingMode::Guest,
                context: sessions.context_for(None).await?,
                cart: cart_id.map(|id| CartKey::Uuid(id.to_string())),
            },
        };
        tracing::debug!(mode = ?addressing.mode, "Resolved cart addressing");
        Ok(addressing)
    }

    /// Writes context, guest flag and cart identifier into `request`.
    pub fn apply<R: CartAddressed>(self, request: &mut R) {
        request.set_addressing(self.context, self.mode, self.cart);
    }
}

fn parse_cart_id(cart_id: &str) -> Result<i32, StoreError> {
    cart_id
        .trim()
        .parse::<i32>()
        .map_err(|e| StoreError::InvalidField {
            field: "cart_id",
            reason: format!("authenticated carts are addressed by numeric id ({e})"),
        })
}

/// A request that carries the guest flag and a cart identifier.
pub trait CartAddressed {
    /// Sets context, guest flag and exactly one cart identifier.
    fn set_addressing(&mut self, context: ClientContext, mode: AddressingMode, cart: Option<CartKey>);

    /// The guest flag as it will be sent.
    fn is_guest(&self) -> bool;

    /// The numeric cart id as it will be sent, `0` when unset.
    fn cart_id(&self) -> i32;

    /// The guest cart id as it will be sent, empty when unset.
    fn cart_uuid(&self) -> &str;
}

macro_rules! cart_addressed {
    ($($request:ty),* $(,)?) => {
        $(
            impl CartAddressed for $request {
                fn set_addressing(
                    &mut self,
                    context: ClientContext,
                    mode: AddressingMode,
                    cart: Option<CartKey>,
                ) {
                    self.client_request = Some(context.to_request());
                    self.is_guest = mode.is_guest();
                    match cart {
                        Some(CartKey::Id(id)) => {
                            self.cart_id = id;
                            self.cart_uuid.clear();
                        }
                        Some(CartKey::Uuid(uuid)) => {
                            self.cart_id = 0;
                            self.cart_uuid = uuid;
                        }
                        None => {
                            self.cart_id = 0;
                            self.cart_uuid.clear();
                        }
                    }
                }

                fn is_guest(&self) -> bool {
                    self.is_guest
                }

                fn cart_id(&self) -> i32 {
                    self.cart_id
                }

                fn cart_uuid(&self) -> &str {
                    &self.cart_uuid
                }
            }
        )*
    };
}

cart_addressed!(
    GetCartRequest,
    UpdateCartRequest,
    DeleteCartItemRequest,
    ListPaymentMethodsRequest,
    ListShippingMethodsRequest,
    GetShippingInformationRequest,
    GetCartTotalsRequest,
);

// A new cart has no identifier yet; only the guest flag applies.
impl CartAddressed for CreateCartRequest {
    fn set_addressing(&mut self, context: ClientContext, mode: AddressingMode, _cart: Option<CartKey>) {
        self.client_request = Some(context.to_request());
        self.is_guest = mode.is_guest();
    }

    fn is_guest(&self) -> bool {
        self.is_guest
    }

    fn cart_id(&self) -> i32 {
        0
    }

    fn cart_uuid(&self) -> &str {
        ""
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Language;

    fn context() -> ClientContext {
        ClientContext::new("ctx", Language::default())
    }

    #[test]
    fn test_apply_authenticated_sets_only_numeric_id() {
        let mut request = GetCartRequest {
            cart_uuid: "stale".to_string(),
            ..GetCartRequest::default()
        };
        Addressing {
            mode: AddressingMode::Authenticated,
            context: context(),
            cart: Some(CartKey::Id(42)),
        }
        .apply(&mut request);

        assert!(!request.is_guest());
        assert_eq!(request.cart_id(), 42);
        assert!(request.cart_uuid().is_empty());
        assert_eq!(request.client_request.unwrap().session_uuid, "ctx");
    }

    #[test]
    fn test_apply_guest_sets_only_uuid() {
        let mut request = UpdateCartRequest {
            cart_id: 9,
            ..UpdateCartRequest::default()
        };
        Addressing {
            mode: AddressingMode::Guest,
            context: context(),
            cart: Some(CartKey::Uuid("guest-cart".to_string())),
        }
        .apply(&mut request);

        assert!(request.is_guest());
        assert_eq!(request.cart_id(), 0);
        assert_eq!(request.cart_uuid(), "guest-cart");
    }

    #[test]
    fn test_parse_cart_id_rejects_non_numeric() {
        assert_eq!(parse_cart_id(" 17 ").unwrap(), 17);
        assert!(matches!(
            parse_cart_id("abc"),
            Err(StoreError::InvalidField { field: "cart_id", .. })
        ));
    }
}
