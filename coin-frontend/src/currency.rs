use crate::types::CurrencyMap;
use yew::prelude::*;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Currency {
    #[default]
    Inr,
    Usd,
}

impl Currency {
    pub const ALL: [Currency; 2] = [Currency::Inr, Currency::Usd];

    pub fn code(&self) -> &'static str {
        match self {
            Currency::Inr => "INR",
            Currency::Usd => "USD",
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::Inr => "₹",
            Currency::Usd => "$",
        }
    }

    /// Key used by the coin API's per-currency maps.
    pub fn code_key(&self) -> String {
        self.code().to_lowercase()
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|currency| currency.code().eq_ignore_ascii_case(code))
    }

    pub fn pick(&self, values: &CurrencyMap) -> Option<f64> {
        values.get(&self.code_key()).copied()
    }
}

#[derive(Clone, PartialEq)]
pub struct CurrencyContext {
    pub currency: Currency,
    pub set_currency: Callback<Currency>,
}

#[derive(Properties, PartialEq)]
pub struct CurrencyProviderProps {
    pub children: Children,
}

#[function_component(CurrencyProvider)]
pub fn currency_provider(props: &CurrencyProviderProps) -> Html {
    let currency = use_state(Currency::default);

    let context = CurrencyContext {
        currency: *currency,
        set_currency: {
            let currency = currency.clone();
            Callback::from(move |next: Currency| {
                log::info!("Display currency set to {}", next.code());
                currency.set(next);
            })
        },
    };

    html! {
        <ContextProvider<CurrencyContext> {context}>
            {props.children.clone()}
        </ContextProvider<CurrencyContext>>
    }
}

/// Selected currency, falling back to the default outside a provider.
#[hook]
pub fn use_currency() -> Currency {
    use_context::<CurrencyContext>()
        .map(|ctx| ctx.currency)
        .unwrap_or_default()
}
