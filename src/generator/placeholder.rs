use std::collections::BTreeMap;
use std::fmt;

/// Substitution points left in the generated documents for the mailer to fill in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Placeholder {
    ClientName,
    CompanyName,
    CompanyTaxId,
    Amount,
    Installments,
    DueDate,
    PaymentLink,
    Year,
    ContactDate,
}

impl Placeholder {
    pub const ALL: [Placeholder; 9] = [
        Placeholder::ClientName,
        Placeholder::CompanyName,
        Placeholder::CompanyTaxId,
        Placeholder::Amount,
        Placeholder::Installments,
        Placeholder::DueDate,
        Placeholder::PaymentLink,
        Placeholder::Year,
        Placeholder::ContactDate,
    ];

    /// Tokens every assembled document carries regardless of layout or body.
    pub const REQUIRED: [Placeholder; 7] = [
        Placeholder::ClientName,
        Placeholder::CompanyName,
        Placeholder::CompanyTaxId,
        Placeholder::Amount,
        Placeholder::Installments,
        Placeholder::DueDate,
        Placeholder::PaymentLink,
    ];

    pub fn key(self) -> &'static str {
        match self {
            Placeholder::ClientName => "cliente_nome",
            Placeholder::CompanyName => "empresa_nome",
            Placeholder::CompanyTaxId => "empresa_cnpj",
            Placeholder::Amount => "valor_formato",
            Placeholder::Installments => "parcelas",
            Placeholder::DueDate => "data_vencimento",
            Placeholder::PaymentLink => "link_pagamento",
            Placeholder::Year => "ano",
            Placeholder::ContactDate => "data_contato",
        }
    }

    pub fn token(self) -> String {
        format!("{{{{{}}}}}", self.key())
    }

    /// Key to literal token map, handed to the skeleton as render context.
    pub fn tokens() -> BTreeMap<&'static str, String> {
        Self::ALL.iter().map(|p| (p.key(), p.token())).collect()
    }
}

impl fmt::Display for Placeholder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{{{}}}}}", self.key())
    }
}
