use tera::{Context as TeraContext, Tera};

use super::{layout::Layout, placeholder::Placeholder};

/// Everything the assembler needs to build one document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DocumentRequest<'a> {
    pub body: &'a str,
    pub layout: Layout,
}

impl<'a> DocumentRequest<'a> {
    pub fn new(body: &'a str, layout: Layout) -> Self {
        Self { body, layout }
    }
}

pub trait TemplateEngine {
    type Error: std::error::Error + Sync + Send + 'static;

    fn assemble(&self, request: &DocumentRequest<'_>) -> Result<String, Self::Error>;
}

pub struct TeraTemplateEngine {
    tera: Tera,
}

impl TeraTemplateEngine {
    pub fn try_init() -> Result<Self, tera::Error> {
        Ok(Self {
            tera: Self::get_tera_template()?,
        })
    }

    pub fn get_tera_template() -> Result<Tera, tera::Error> {
        let mut tera = Tera::default();
        tera.add_raw_templates(vec![
            (
                Layout::Detailed.template_name(),
                r###"<!DOCTYPE html>
<html lang="pt-BR">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Notificação de Cobrança</title>
    <style>
{{ css | safe }}
    </style>
</head>
<body>
    <div class="container">
        <!-- Header -->
        <div class="header">
            <img src="{{ logo_cid }}" alt="Logo Empresa" class="logo">
        </div>

        <!-- Content -->
        <div class="content">
            <div class="greeting">
                Prezado <strong>{{ field.cliente_nome }}</strong>,
            </div>

            <div class="body-text">
{{ body | safe }}
            </div>

            <!-- Detalhes da Cobrança -->
            <div class="details">
                <div class="detail-row">
                    <span class="detail-label">Empresa:</span>
                    <span class="detail-value">{{ field.empresa_nome }}</span>
                </div>
                <div class="detail-row">
                    <span class="detail-label">CNPJ:</span>
                    <span class="detail-value">{{ field.empresa_cnpj }}</span>
                </div>
                <div class="detail-row">
                    <span class="detail-label">Valor:</span>
                    <span class="detail-value">{{ field.valor_formato }}</span>
                </div>
                <div class="detail-row">
                    <span class="detail-label">Parcelas:</span>
                    <span class="detail-value">{{ field.parcelas }}</span>
                </div>
                <div class="detail-row">
                    <span class="detail-label">Vencimento:</span>
                    <span class="detail-value">{{ field.data_vencimento }}</span>
                </div>
            </div>

            <!-- Botão de Ação -->
            <div class="button-container">
                <a href="{{ field.link_pagamento }}" class="button">Regularizar Pagamento</a>
            </div>

            <!-- Seção de Contato -->
            <div class="section-title">Dúvidas?</div>
            <div class="contact-info">
                <p>Caso tenha dúvidas sobre este pagamento, entre em contato conosco:</p>
                <p><strong>Email:</strong> contato@empresa.com.br</p>
                <p><strong>Telefone:</strong> (XX) XXXXX-XXXX</p>
            </div>

            <div class="signature">
                Atenciosamente,<br>
                <strong>{{ field.empresa_nome }}</strong>
            </div>
        </div>

        <!-- Footer -->
        <div class="footer">
            <img src="{{ logo_cid }}" alt="Logo" class="footer-logo">
            <p>Esta é uma mensagem automática. Por favor, não responda este e-mail.</p>
            <p>&copy; {{ field.ano }} {{ field.empresa_nome }}. Todos os direitos reservados.</p>
        </div>
    </div>
</body>
</html>"###,
            ),
            (
                Layout::Narrative.template_name(),
                r###"<!DOCTYPE html>
<html lang="pt-BR">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>PROTEQ Jr - Notificação</title>
    <style>
{{ css | safe }}
    </style>
</head>
<body>
    <div class="container">
        <!-- Header com Logo PROTEQ -->
        <div class="header">
            <img src="{{ logo_cid }}" alt="PROTEQ Jr" class="logo">
        </div>

        <!-- Conteúdo Principal -->
        <div class="content">
            <div class="body-text">
{{ body | safe }}
            </div>

            <!-- Resumo da Cobrança -->
            <p class="summary">
                Cliente: {{ field.cliente_nome }} &middot; Empresa: {{ field.empresa_nome }} (CNPJ: {{ field.empresa_cnpj }}) &middot; Valor: {{ field.valor_formato }} em {{ field.parcelas }} parcelas &middot; Vencimento: {{ field.data_vencimento }}
            </p>

            <!-- Botão de Ação -->
            <div class="button-container">
                <a href="{{ field.link_pagamento }}" class="button">Realizar Pagamento</a>
            </div>

            <!-- Seção de Contato -->
            <div class="contact-section">
                <div class="contact-label">Entre em Contato</div>
                <div class="contact-info">
                    <p><strong>Email:</strong> contato@proteqjr.com.br</p>
                    <p><strong>Telefone:</strong> (82) 99329-7024</p>
                </div>
            </div>

            <!-- Assinatura -->
            <div class="signature">
                Atenciosamente,
                <strong>PROTEQ Jr - Tecnologia e Inovação</strong>
            </div>
        </div>

        <!-- Rodapé -->
        <div class="footer">
            <p>Esta é uma mensagem automática. Por favor, não responda este e-mail.</p>
            <p>&copy; 2025-2026 PROTEQ Jr. Todos os direitos reservados.</p>
        </div>
    </div>
</body>
</html>"###,
            ),
        ])?;
        Ok(tera)
    }
}

impl TemplateEngine for TeraTemplateEngine {
    type Error = tera::Error;

    #[tracing::instrument(level = "debug", skip(self, request), fields(layout = %request.layout))]
    fn assemble(&self, request: &DocumentRequest<'_>) -> Result<String, Self::Error> {
        let layout = request.layout;
        let mut tera_context = TeraContext::new();
        tera_context.insert("css", layout.css());
        tera_context.insert("logo_cid", layout.logo_cid());
        tera_context.insert("body", request.body);
        tera_context.insert("field", &Placeholder::tokens());
        let content = self.tera.render(layout.template_name(), &tera_context)?;
        Ok(content)
    }
}
