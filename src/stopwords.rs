//! Stopword sets used by the token feature extractor.
//!
//! The built-in list is the closed set of Spanish function words (articles,
//! prepositions, conjunctions, pronouns and the conjugations of the auxiliary
//! verbs) commonly shipped with NLP toolkits. A [`StopWords`] value is built
//! once at startup and shared read-only with the stages that need it.

use std::collections::HashSet;

/// Spanish function words, lowercase and whitespace separated.
pub const SPANISH: &str = "\
de la que el en y a los del se las por un para con no una su al lo como más pero sus le ya o
este sí porque esta entre cuando muy sin sobre también me hasta hay donde quien desde todo nos
durante todos uno les ni contra otros ese eso ante ellos e esto mí antes algunos qué unos yo
otro otras otra él tanto esa estos mucho quienes nada muchos cual poco ella estar estas algunas
algo nosotros mi mis tú te ti tu tus ellas nosotras vosotros vosotras os mío mía míos mías tuyo
tuya tuyos tuyas suyo suya suyos suyas nuestro nuestra nuestros nuestras vuestro vuestra
vuestros vuestras esos esas estoy estás está estamos estáis están esté estés estemos estéis
estén estaré estarás estará estaremos estaréis estarán estaría estarías estaríamos estaríais
estarían estaba estabas estábamos estabais estaban estuve estuviste estuvo estuvimos estuvisteis
estuvieron estuviera estuvieras estuviéramos estuvierais estuvieran estuviese estuvieses
estuviésemos estuvieseis estuviesen estando estado estada estados estadas estad he has ha hemos
habéis han haya hayas hayamos hayáis hayan habré habrás habrá habremos habréis habrán habría
habrías habríamos habríais habrían había habías habíamos habíais habían hube hubiste hubo
hubimos hubisteis hubieron hubiera hubieras hubiéramos hubierais hubieran hubiese hubieses
hubiésemos hubieseis hubiesen habiendo habido habida habidos habidas soy eres es somos sois son
sea seas seamos seáis sean seré serás será seremos seréis serán sería serías seríamos seríais
serían era eras éramos erais eran fui fuiste fue fuimos fuisteis fueron fuera fueras fuéramos
fuerais fueran fuese fueses fuésemos fueseis fuesen sintiendo sentido sentida sentidos sentidas
siente sentid tengo tienes tiene tenemos tenéis tienen tenga tengas tengamos tengáis tengan
tendré tendrás tendrá tendremos tendréis tendrán tendría tendrías tendríamos tendríais tendrían
tenía tenías teníamos teníais tenían tuve tuviste tuvo tuvimos tuvisteis tuvieron tuviera
tuvieras tuviéramos tuvierais tuvieran tuviese tuvieses tuviésemos tuvieseis tuviesen teniendo
tenido tenida tenidos tenidas tened
";

/// An immutable-after-construction set of lowercase stopwords.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StopWords {
    words: HashSet<String>,
}

impl StopWords {
    /// An empty set; every alphabetic token counts.
    pub fn empty() -> Self {
        StopWords::default()
    }

    /// The built-in Spanish list.
    pub fn spanish() -> Self {
        StopWords::from_words(SPANISH.split_whitespace())
    }

    /// Build a set from arbitrary words, lowercasing each one.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut set = StopWords::empty();
        set.extend(words);
        set
    }

    /// Add words to the set. Blank entries are skipped.
    pub fn extend<I, S>(&mut self, words: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.words.extend(
            words
                .into_iter()
                .map(|w| w.as_ref().trim().to_lowercase())
                .filter(|w| !w.is_empty()),
        );
    }

    /// Add the words of a newline-separated list; `#` starts a comment line.
    pub fn extend_from_list(&mut self, list: &str) {
        let is_comment = |line: &&str| line.trim_start().starts_with('#');
        self.extend(list.lines().filter(|line| !is_comment(line)));
    }

    /// Lookup expects an already lowercased token.
    pub fn contains(&self, token: &str) -> bool {
        self.words.contains(token)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spanish_list_has_no_duplicates() {
        assert_eq!(
            StopWords::spanish().len(),
            SPANISH.split_whitespace().count()
        );
    }

    #[test]
    fn test_spanish_contains_function_words() {
        let words = StopWords::spanish();
        for word in ["de", "el", "la", "qué", "también", "nosotros", "hubiésemos"] {
            assert!(words.contains(word), "missing {word}");
        }
        assert!(!words.contains("gobierno"));
    }

    #[test]
    fn test_from_words_lowercases() {
        let words = StopWords::from_words(["Dijo", "  SEGÚN "]);
        assert!(words.contains("dijo"));
        assert!(words.contains("según"));
        assert!(!words.contains("Dijo"));
    }

    #[test]
    fn test_extend_from_list_skips_comments_and_blanks() {
        let mut words = StopWords::empty();
        words.extend_from_list("# newsroom filler\nafirmó\n\n  señaló\n");
        assert_eq!(words.len(), 2);
        assert!(words.contains("afirmó"));
        assert!(words.contains("señaló"));
    }
}
