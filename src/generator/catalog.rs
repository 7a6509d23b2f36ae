use std::str::FromStr;

use thiserror::Error;

use super::layout::Layout;

/// One notification document: the file it is written to and the prose it carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogEntry {
    pub identifier: &'static str,
    pub body: &'static str,
}

const INITIAL_ENTRIES: &[CatalogEntry] = &[
    CatalogEntry {
        identifier: "primeira-cobranca.html",
        body: r###"Este é o primeiro aviso referente a um pagamento pendente em sua conta.
                Para evitar problemas com seu cadastro, solicitamos que regularize o pagamento assim que possível.
                A falta de pagamento pode resultar em restrições futuras ao acesso dos nossos serviços."###,
    },
    CatalogEntry {
        identifier: "cobranca-7dias.html",
        body: r###"Informamos que o prazo para pagamento está se encerrando. Faltam apenas 7 dias para o vencimento.
                Pedimos que realize o pagamento no prazo estabelecido para evitar possíveis pendências.
                Qualquer dúvida, não hesite em nos contatar."###,
    },
    CatalogEntry {
        identifier: "cobranca-15dias.html",
        body: r###"Este é um aviso urgente: sua cobrança está com 15 dias de atraso.
                Solicitamos atenção imediata para regularização desta pendência.
                Atrasos podem prejudicar sua reputação e resultar em restrições de serviços."###,
    },
    CatalogEntry {
        identifier: "cobranca-30dias.html",
        body: r###"AVISO CRÍTICO: Sua cobrança está com 30 dias de atraso.
                Esta é uma notificação de urgência máxima. Procure regularizar este pagamento imediatamente.
                Caso não haja regularização nos próximos dias, medidas adicionais podem ser tomadas.
                Contate-nos imediatamente para discutir opções de parcelamento ou negociação."###,
    },
    CatalogEntry {
        identifier: "solicitacao-contato.html",
        body: r###"Recebemos sua solicitação de contato. Agradecemos o interesse em nossos serviços.
                Nossa equipe analisará sua mensagem e retornaremos em breve com mais informações.
                Fique atento à sua caixa de entrada e à pasta de spam para não perder nossa resposta."###,
    },
];

const REVISED_ENTRIES: &[CatalogEntry] = &[
    CatalogEntry {
        identifier: "primeira-cobranca.html",
        body: r###"Prezado {{cliente_nome}},

Esperamos que esteja bem. Entramos em contato para informar sobre um pagamento pendente em sua conta junto à PROTEQ Jr.

Você possui uma cobrança referente à {{empresa_nome}} (CNPJ: {{empresa_cnpj}}) no valor de <strong>{{valor_formato}}</strong>, dividida em <strong>{{parcelas}}</strong> parcelas, com vencimento em <strong>{{data_vencimento}}</strong>.

Para que não haja problemas com seu cadastro, solicitamos que regularize o pagamento assim que possível. A falta de pagamento pode resultar em restrições futuras ao acesso dos nossos serviços.

Clique no botão abaixo para realizar o pagamento de forma rápida e segura."###,
    },
    CatalogEntry {
        identifier: "cobranca-7dias.html",
        body: r###"Prezado {{cliente_nome}},

Informamos que o prazo para pagamento está se encerrando. Você possui uma cobrança referente à {{empresa_nome}} (CNPJ: {{empresa_cnpj}}) no valor de <strong>{{valor_formato}}</strong>, dividida em <strong>{{parcelas}}</strong> parcelas, e o vencimento é <strong>em apenas 7 dias ({{data_vencimento}})</strong>.

Pedimos que realize o pagamento no prazo estabelecido para evitar possíveis pendências em sua conta. Qualquer dúvida sobre os detalhes da cobrança, não hesite em nos contatar através dos canais de atendimento disponibilizados abaixo.

Clique no botão abaixo para regularizar seu pagamento agora."###,
    },
    CatalogEntry {
        identifier: "cobranca-15dias.html",
        body: r###"Prezado {{cliente_nome}},

Este é um aviso importante: sua cobrança está com <strong>15 dias de atraso</strong>.

Você possui uma dívida referente à {{empresa_nome}} (CNPJ: {{empresa_cnpj}}) no valor de <strong>{{valor_formato}}</strong>, dividida em <strong>{{parcelas}}</strong> parcelas, que deveria ter sido paga em <strong>{{data_vencimento}}</strong>.

Solicitamos atenção imediata para regularização desta pendência. Atrasos podem prejudicar sua reputação e resultar em restrições de serviços. Recomendamos que efetue o pagamento o quanto antes para evitar consequências maiores.

Clique no botão abaixo para regularizar seu pagamento imediatamente."###,
    },
    CatalogEntry {
        identifier: "cobranca-30dias.html",
        body: r###"Prezado {{cliente_nome}},

AVISO URGENTE: Sua cobrança está com <strong>30 dias de atraso</strong>.

Você possui uma dívida crítica referente à {{empresa_nome}} (CNPJ: {{empresa_cnpj}}) no valor de <strong>{{valor_formato}}</strong>, dividida em <strong>{{parcelas}}</strong> parcelas, que venceu em <strong>{{data_vencimento}}</strong> e ainda não foi regularizada.

Esta é uma notificação de urgência máxima. A falta de pagamento pode resultar em restrições severas de acesso aos nossos serviços e impactar suas operações. Procure regularizar este pagamento imediatamente. Caso não haja regularização nos próximos dias, medidas adicionais podem ser tomadas.

Entre em contato conosco urgentemente para discutir opções de parcelamento ou negociação."###,
    },
    CatalogEntry {
        identifier: "solicitacao-contato.html",
        body: r###"Prezado {{cliente_nome}},

Recebemos sua solicitação de contato enviada em <strong>{{data_contato}}</strong>. Agradecemos o interesse em nossos serviços e a oportunidade de conversar com você.

Nossa equipe analisará sua mensagem com atenção e retornaremos em breve com mais informações. Fique atento à sua caixa de entrada e também à pasta de spam para não perder nossa resposta.

Se a sua dúvida for urgente, você também pode entrar em contato direto conosco através dos dados disponibilizados abaixo."###,
    },
];

/// Ordered, immutable set of documents produced by one generator run.
#[derive(Debug, Clone, Copy)]
pub struct Catalog {
    entries: &'static [CatalogEntry],
}

impl Catalog {
    /// Short reminder paragraphs; billing fields come from the layout.
    pub fn initial() -> Self {
        Self {
            entries: INITIAL_ENTRIES,
        }
    }

    /// Full letters with the billing fields woven into the prose.
    pub fn revised() -> Self {
        Self {
            entries: REVISED_ENTRIES,
        }
    }

    pub fn for_layout(layout: Layout) -> Self {
        match layout {
            Layout::Detailed => Self::initial(),
            Layout::Narrative => Self::revised(),
        }
    }

    pub fn entries(&self) -> &'static [CatalogEntry] {
        self.entries
    }

    pub fn get(&self, identifier: &str) -> Option<&'static CatalogEntry> {
        self.entries.iter().find(|entry| entry.identifier == identifier)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromStr for Catalog {
    type Err = UnknownCatalog;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "initial" => Ok(Self::initial()),
            "revised" => Ok(Self::revised()),
            _ => Err(UnknownCatalog(s.to_string())),
        }
    }
}

#[derive(Debug, Error, PartialEq)]
#[error("unknown catalog `{0}`, expected `initial` or `revised`")]
pub struct UnknownCatalog(pub String);

#[cfg(test)]
mod test {
    use super::{Catalog, Layout};

    const IDENTIFIERS: [&str; 5] = [
        "primeira-cobranca.html",
        "cobranca-7dias.html",
        "cobranca-15dias.html",
        "cobranca-30dias.html",
        "solicitacao-contato.html",
    ];

    #[test]
    fn test_catalogs_share_identifiers_in_order() {
        for catalog in &[Catalog::initial(), Catalog::revised()] {
            let identifiers = catalog
                .entries()
                .iter()
                .map(|entry| entry.identifier)
                .collect::<Vec<_>>();
            assert_eq!(identifiers, IDENTIFIERS);
        }
    }

    #[test]
    fn test_revised_bodies_carry_billing_placeholders() {
        let catalog = Catalog::revised();
        let entry = catalog.get("primeira-cobranca.html").unwrap();
        assert!(entry.body.contains("<strong>{{valor_formato}}</strong>"));
        assert!(entry.body.starts_with("Prezado {{cliente_nome}},"));

        let contact = catalog.get("solicitacao-contato.html").unwrap();
        assert!(contact.body.contains("{{data_contato}}"));
        assert!(!contact.body.contains("{{valor_formato}}"));
    }

    #[test]
    fn test_initial_bodies_are_plain_prose() {
        for entry in Catalog::initial().entries() {
            assert!(!entry.body.contains("{{"), "{}", entry.identifier);
        }
    }

    #[test]
    fn test_catalog_for_layout() {
        assert_eq!(
            Catalog::for_layout(Layout::Detailed).get("cobranca-7dias.html"),
            Catalog::initial().get("cobranca-7dias.html")
        );
        assert!("revised".parse::<Catalog>().is_ok());
        assert!("final".parse::<Catalog>().is_err());
        assert_eq!(Catalog::initial().len(), 5);
        assert!(Catalog::revised().get("missing.html").is_none());
    }
}
