//! Canned reply composition.
//!
//! For the winning category, picks a reply template by scanning the
//! lowercased content for topical phrase groups in a fixed priority order,
//! first match wins. The semantic path carries the full template set and
//! only drills into sub-templates when the winning similarity is high; the
//! keyword path uses a reduced set. Every path ends in a non-empty generic
//! template, so a reply is always produced.

use crate::types::Category;

/// Winning-similarity threshold above which sub-templates are considered.
const SUB_TEMPLATE_THRESHOLD: f32 = 0.8;

// Topical phrase groups, scanned in declaration order.
const STATUS_CUES: &[&str] = &["status", "andamento", "atualização"];
const PROBLEM_CUES: &[&str] = &["problema", "erro", "bug", "falha"];
const DOCUMENT_CUES: &[&str] = &["documento", "arquivo", "anexo", "aprovação"];
const CONGRATS_CUES: &[&str] = &["parabéns", "parabens", "felicitações"];
const GRATITUDE_CUES: &[&str] = &["obrigado", "obrigada", "agradecer"];
const SEASONAL_CUES: &[&str] = &["feliz", "natal", "ano novo", "aniversário"];

// Full template set (semantic path).
const SEMANTIC_STATUS_REPLY: &str = "Obrigado por seu contato. Verificamos que você está solicitando uma atualização de status. Nossa equipe está analisando sua solicitação e retornaremos com informações detalhadas em até 24 horas.";
const SEMANTIC_PROBLEM_REPLY: &str = "Recebemos seu relato sobre o problema técnico. Nosso time especializado já foi notificado e está trabalhando na correção. Manteremos você informado sobre o progresso da solução.";
const SEMANTIC_DOCUMENT_REPLY: &str = "Confirmamos o recebimento da documentação. Nossa equipe de análise revisará os materiais enviados e forneceremos feedback dentro do prazo estabelecido.";
const SEMANTIC_PRODUCTIVE_REPLY: &str = "Agradecemos seu contato. Sua mensagem foi classificada como prioritária e será direcionada para a equipe responsável. Retornaremos em breve com uma resposta detalhada.";
const SEMANTIC_CONGRATS_REPLY: &str = "Muito obrigado pelas felicitações! Ficamos honrados em receber seu reconhecimento. Continuaremos trabalhando com dedicação.";
const SEMANTIC_GRATITUDE_REPLY: &str = "Foi um prazer ajudar! Estamos sempre à disposição para apoiá-lo. Conte conosco sempre que precisar.";
const SEMANTIC_SEASONAL_REPLY: &str = "Muito obrigado pelos votos! Desejamos tudo de melhor para você também. Que seja um período repleto de alegrias e conquistas.";
const SEMANTIC_UNPRODUCTIVE_REPLY: &str = "Agradecemos sua mensagem! É sempre bom receber seu contato. Tenha um excelente dia!";

// Reduced template set (keyword path).
const KEYWORD_STATUS_REPLY: &str = "Obrigado por seu contato. Estamos verificando o status da sua solicitação e retornaremos em breve com uma atualização.";
const KEYWORD_PROBLEM_REPLY: &str = "Recebemos seu relato sobre o problema. Nossa equipe técnica está analisando a situação e entraremos em contato com uma solução.";
const KEYWORD_DOCUMENT_REPLY: &str = "Confirmamos o recebimento do seu documento. Nosso time está analisando e responderemos dentro do prazo estabelecido.";
const KEYWORD_PRODUCTIVE_REPLY: &str = "Obrigado por entrar em contato. Sua mensagem foi recebida e será analisada por nossa equipe. Retornaremos em breve.";
/// Single generic thank-you of the keyword path.
pub const KEYWORD_UNPRODUCTIVE_REPLY: &str = "Agradecemos sua mensagem! Ficamos felizes em receber seu contato.";

/// Compose a reply on the semantic path.
///
/// `winning_similarity` is the winning category's best reference similarity;
/// sub-templates apply only above [`SUB_TEMPLATE_THRESHOLD`].
pub fn semantic_reply(category: Category, content: &str, winning_similarity: f32) -> &'static str {
    let content_lower = content.to_lowercase();

    match category {
        Category::Productive => {
            if winning_similarity > SUB_TEMPLATE_THRESHOLD {
                if contains_any(&content_lower, STATUS_CUES) {
                    return SEMANTIC_STATUS_REPLY;
                }
                if contains_any(&content_lower, PROBLEM_CUES) {
                    return SEMANTIC_PROBLEM_REPLY;
                }
                if contains_any(&content_lower, DOCUMENT_CUES) {
                    return SEMANTIC_DOCUMENT_REPLY;
                }
            }
            SEMANTIC_PRODUCTIVE_REPLY
        }
        Category::Unproductive => {
            if winning_similarity > SUB_TEMPLATE_THRESHOLD {
                if contains_any(&content_lower, CONGRATS_CUES) {
                    return SEMANTIC_CONGRATS_REPLY;
                }
                if contains_any(&content_lower, GRATITUDE_CUES) {
                    return SEMANTIC_GRATITUDE_REPLY;
                }
                if contains_any(&content_lower, SEASONAL_CUES) {
                    return SEMANTIC_SEASONAL_REPLY;
                }
            }
            SEMANTIC_UNPRODUCTIVE_REPLY
        }
    }
}

/// Compose a reply on the keyword path (reduced template set).
pub fn keyword_reply(category: Category, content: &str) -> &'static str {
    let content_lower = content.to_lowercase();

    match category {
        Category::Productive => {
            if content_lower.contains("status") || content_lower.contains("andamento") {
                KEYWORD_STATUS_REPLY
            } else if content_lower.contains("problema") || content_lower.contains("erro") {
                KEYWORD_PROBLEM_REPLY
            } else if content_lower.contains("documento") || content_lower.contains("arquivo") {
                KEYWORD_DOCUMENT_REPLY
            } else {
                KEYWORD_PRODUCTIVE_REPLY
            }
        }
        Category::Unproductive => KEYWORD_UNPRODUCTIVE_REPLY,
    }
}

fn contains_any(text: &str, cues: &[&str]) -> bool {
    cues.iter().any(|cue| text.contains(cue))
}
