use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;
use rust_stemmers::{Algorithm, Stemmer};

use crate::application::ports::TextNormalizer;

static NON_ALPHABETIC: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^a-zA-Z\s]").unwrap());

// Only entries that can survive the character filter are listed; accented
// stop-words are stripped to fragments before the lookup happens.
const PORTUGUESE_STOP_WORDS: &str = "
    a ao aos aquela aquelas aquele aqueles aquilo as ate com como da das de dela delas dele
    deles depois do dos e ela elas ele eles em entre era eram essa essas esse esses esta estamos
    estar estas estava estavam este esteja estejam estejamos estes esteve estive estivemos estiver
    estivera estiveram estiverem estivermos estivesse estivessem estou eu foi fomos for fora foram
    forem formos fosse fossem fui haja hajam hajamos havemos haver hei houve houvemos houver
    houvera houveram houverem houveremos houveria houveriam houvermos houvesse houvessem isso
    isto lhe lhes mais mas me mesmo meu meus minha minhas muito na nas nem no nos nossa nossas
    nosso nossos num numa o os ou para pela pelas pelo pelos por qual quando que quem se seja
    sejam sejamos sem ser serei seremos seria seriam seu seus somos sou sua suas te tem temos
    tenha tenham tenhamos tenho terei teremos teria teriam teu teus teve tinha tinham tive
    tivemos tiver tivera tiveram tiverem tivermos tivesse tivessem tu tua tuas um uma vos
";

const ENGLISH_STOP_WORDS: &str = "
    i me my myself we our ours ourselves you your yours yourself yourselves he him his himself
    she her hers herself it its itself they them their theirs themselves what which who whom
    this that these those am is are was were be been being have has had having do does did
    doing a an the and but if or because as until while of at by for with about against between
    into through during before after above below to from up down in out on off over under again
    further then once here there when where why how all any both each few more most other some
    such no nor not only own same so than too very s t can will just don should now d ll m o re
    ve y ain aren couldn didn doesn hadn hasn haven isn ma mightn mustn needn shan shouldn wasn
    weren won wouldn
";

static STOP_WORDS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    PORTUGUESE_STOP_WORDS
        .split_whitespace()
        .chain(ENGLISH_STOP_WORDS.split_whitespace())
        .collect()
});

/// Lowercases, keeps ASCII letters only, drops Portuguese and English
/// stop-words and stems what remains with the Snowball English stemmer.
pub struct PortugueseNormalizer {
    stemmer: Stemmer,
}

impl PortugueseNormalizer {
    pub fn new() -> Self {
        Self {
            stemmer: Stemmer::create(Algorithm::English),
        }
    }
}

impl Default for PortugueseNormalizer {
    fn default() -> Self {
        Self::new()
    }
}

impl TextNormalizer for PortugueseNormalizer {
    fn normalize(&self, raw: &str) -> String {
        let lowered = raw.to_lowercase();
        let letters_only = NON_ALPHABETIC.replace_all(&lowered, "");

        letters_only
            .split_whitespace()
            .filter(|token| !STOP_WORDS.contains(token))
            .map(|token| self.stemmer.stem(token).into_owned())
            .collect::<Vec<_>>()
            .join(" ")
    }
}
