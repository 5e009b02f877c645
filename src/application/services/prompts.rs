use crate::domain::{Category, Classification, EmailContent};

/// Prompt asking the model for a JSON verdict on one email.
pub fn build_classification_prompt(content: &EmailContent) -> String {
    format!(
        r#"Analise o email abaixo e classifique-o como "Produtivo" ou "Improdutivo" com base no contexto e na intenção do remetente.
Atribua também uma pontuação de 0 a 100 que represente o nível de produtividade do email.

EMAIL: "{content}"

CRITÉRIOS DE CLASSIFICAÇÃO:
- "Produtivo": exige ação ou resposta específica, como pedido de suporte, problema técnico, dúvida operacional, atualização de status ou assunto comercial
- "Improdutivo": não exige ação, como saudações, agradecimentos, felicitações, mensagens sociais, contatos informais ou spam

ESCALA DE PONTUAÇÃO:
- 0-20: claramente improdutivo (saudações simples, spam)
- 21-40: majoritariamente improdutivo (agradecimentos, felicitações)
- 41-60: neutro ou misto (elementos das duas categorias)
- 61-80: majoritariamente produtivo (dúvidas simples, solicitações)
- 81-100: claramente produtivo (problemas urgentes, solicitações específicas)

Responda SOMENTE com um objeto JSON, sem texto adicional:
{{
    "categoria": "Produtivo" ou "Improdutivo",
    "pontuacao_produtividade": número entre 0 e 100,
    "razao": "breve explicação da classificação e da pontuação"
}}"#,
        content = content.as_str()
    )
}

/// Category-conditioned prompt asking the model for a reply draft.
pub fn build_reply_prompt(content: &EmailContent, classification: &Classification) -> String {
    let score = classification.productivity_score.value();
    match classification.category {
        Category::Productive => format!(
            r#"Este email foi CLASSIFICADO COMO PRODUTIVO (pontuação: {score:.0}%). Escreva uma resposta profissional em português.

EMAIL: "{content}"

INSTRUÇÕES:
- Agradeça o contato
- Confirme o recebimento e o encaminhamento da solicitação
- Informe um prazo realista de retorno (24 a 48 horas)
- Mantenha um tom empático e profissional
- Seja conciso (3 a 4 frases)
- Termine com uma saudação profissional
- Devolva apenas o texto final da resposta, sem introdução

RESPOSTA:"#,
            content = content.as_str()
        ),
        Category::Unproductive => format!(
            r#"Este email foi CLASSIFICADO COMO IMPRODUTIVO (pontuação: {score:.0}%). Escreva uma resposta cordial em português.

EMAIL: "{content}"

INSTRUÇÕES:
- Agradeça a mensagem
- Seja breve e educado, com tom leve e amigável
- Não ofereça suporte técnico
- No máximo 1 a 2 frases
- Termine com uma saudação amigável
- Devolva apenas o texto final da resposta, sem introdução

RESPOSTA:"#,
            content = content.as_str()
        ),
    }
}

