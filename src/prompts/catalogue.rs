// file: src/prompts/catalogue.rs
// description: static per-religion listing of canonical source texts
// reference: internal reference data

use crate::models::Religion;

const HINDUISM: &str = "\
🕉️ Hinduism:
    Sruti (Apaurusheya):
        Vedas – Rig, Yajur, Sama, Atharva
        Upanishads (e.g., Isha, Kena, Katha, Brihadaranyaka, Chandogya, Mundaka, Mandukya, Prashna, Aitareya, Taittiriya, Shvetashvatara)
        Aranyakas
        Brahmanas
    Smriti:
        Bhagavad Gita (part of Mahabharata)
        Manusmriti, Yajnavalkya Smriti, Narada Smriti, Brihaspati Smriti
        18 Major Puranas (e.g., Vishnu Purana, Bhagavata Purana, Shiva Purana, Markandeya Purana, Garuda Purana, Padma Purana) and 18 Upapuranas
        Epics: Mahabharata, Ramayana
        Darshanas (Philosophical Schools): Nyaya Sutras, Vaisheshika Sutras, Samkhya Karika, Yoga Sutras of Patanjali, Mimamsa Sutras, Vedanta (Brahma Sutras)
        Agamas (Tantric texts)
        Sutras: Narada Bhakti Sutra, Shandilya Bhakti Sutra
        Upa-Vedas: Ayurveda (medicine), Dhanurveda (archery), Gandharvaveda (music/dance), Shilpaveda (architecture)
";

const ISLAM: &str = "\
☪️ Islam:
    Primary:
        Qur'an
    Secondary (Hadith Collections - provide specific collection if possible):
        Sahih al-Bukhari
        Sahih Muslim
        Sunan Abu Dawood
        Jami' at-Tirmidhi
        Sunan an-Nasa'i
        Sunan Ibn Majah
        Muwatta Imam Malik
";

const CHRISTIANITY: &str = "\
✝️ Christianity:
    Holy Bible:
        Old Testament (e.g., Genesis, Exodus, Psalms, Proverbs, Isaiah, Ecclesiastes, Micah)
        New Testament (e.g., Gospels - Matthew, Mark, Luke, John; Epistles - Romans, Corinthians, Ephesians; Revelation)
";

const BUDDHISM: &str = "\
☸️ Buddhism:
    Pali Canon (Tipitaka):
        Vinaya Pitaka (monastic discipline)
        Sutta Pitaka (discourses - e.g., Digha Nikaya, Majjhima Nikaya, Samyutta Nikaya, Anguttara Nikaya, Khuddaka Nikaya which includes Dhammapada, Sutta Nipata, Jataka tales)
        Abhidhamma Pitaka (philosophy/psychology)
    Mahayana Sutras:
        Prajnaparamita Sutras (e.g., Heart Sutra, Diamond Sutra)
        Lotus Sutra
        Avatamsaka Sutra
        Lankavatara Sutra
        Pure Land Sutras
    Tibetan Book of the Dead (Bardo Thodol) - Vajrayana
";

const JUDAISM: &str = "\
🕎 Judaism:
    Tanakh (Hebrew Bible):
        Torah (Pentateuch: Genesis, Exodus, Leviticus, Numbers, Deuteronomy)
        Nevi'im (Prophets: e.g., Joshua, Judges, Samuel, Kings, Isaiah, Jeremiah, Ezekiel, Micah)
        Ketuvim (Writings: e.g., Psalms, Proverbs, Job, Song of Songs, Ruth, Lamentations, Ecclesiastes, Esther, Daniel, Ezra-Nehemiah, Chronicles)
    Talmud:
        Mishnah
        Gemara
    Midrash
    Zohar (Kabbalah)
";

const JAINISM: &str = "\
🛕 Jainism:
    Agamas (canonical scriptures, divided into Angas, Upangas, Prakirnakas, Chedasutras, Mulasutras)
        Example: Acharanga Sutra, Sutrakritanga Sutra, Kalpa Sutra
    Tattvartha Sutra (major philosophical text accepted by all sects)
    Samayasara (by Acharya Kundakunda)
    Ratnakaranda Sravakacara
";

const SIKHISM: &str = "\
🛐 Sikhism:
    Primary:
        Guru Granth Sahib (referred to by Ang or Page number, and often by Mehl indicating the Guru)
    Secondary:
        Dasam Granth (writings attributed to Guru Gobind Singh)
        Varan Bhai Gurdas (commentaries by Bhai Gurdas)
        Janamsakhis (biographies of Guru Nanak)
";

const TAOISM: &str = "\
☯️ Taoism:
    Tao Te Ching (Daodejing) - by Laozi
    Zhuangzi (Chuang Tzu)
    Liezi
    Daozang (Taoist Canon - a vast collection of texts)
";

pub fn reference_block(religion: Religion) -> &'static str {
    match religion {
        Religion::Hinduism => HINDUISM,
        Religion::Islam => ISLAM,
        Religion::Christianity => CHRISTIANITY,
        Religion::Buddhism => BUDDHISM,
        Religion::Judaism => JUDAISM,
        Religion::Jainism => JAINISM,
        Religion::Sikhism => SIKHISM,
        Religion::Taoism => TAOISM,
    }
}

/// Reference blocks for the selected religions only, in canonical order,
/// separated by blank lines.
pub fn scoped_catalogue(religions: &[Religion]) -> String {
    Religion::normalize_selection(religions)
        .into_iter()
        .map(reference_block)
        .collect::<Vec<_>>()
        .join("\n")
}
