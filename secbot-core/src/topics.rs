//! The built-in cybersecurity topics and their response pools.
//!
//! Each constructor wires one handler: keyword set, response bank, and
//! interest policy. Dispatch order is fixed in [`crate::session`]; topic
//! labels are chosen so each label contains one of its own keywords,
//! which lets "tell me more" route back to the same handler.

use crate::bank::{BankError, ResponseBank};
use crate::handler::{FallbackHandler, InterestPolicy, TopicHandler};

fn bank(name: &str, templates: &[&str]) -> Result<ResponseBank, BankError> {
    ResponseBank::new(name, templates.iter().map(|t| t.to_string()).collect())
}

pub fn greeting() -> Result<TopicHandler, BankError> {
    Ok(TopicHandler::new(
        "greeting",
        None,
        &["hello", "hey", "how are you"],
        bank(
            "greeting",
            &[
                "I'm doing well, {name}! Ready to help with your cybersecurity questions.",
                "All systems functioning optimally, {name}! How can I assist you today?",
                "Hello {name}! I'm here and ready to discuss cybersecurity with you.",
                "Greetings {name}! Your digital safety is my top priority. What can I help with?",
                "Hi there {name}! Let's talk about keeping you secure online.",
            ],
        )?,
        InterestPolicy::None,
    ))
}

pub fn purpose() -> Result<TopicHandler, BankError> {
    Ok(TopicHandler::new(
        "purpose",
        None,
        &["purpose", "what are you", "why are you here", "function", "goal"],
        bank(
            "purpose",
            &[
                "{name}, my purpose is to:\n- Educate about cyber threats\n- Provide safety tips\n- Help recognize scams\n- Promote digital safety",
                "{name}, I'm here to:\n• Teach cybersecurity basics\n• Warn about online dangers\n• Suggest protection methods\n• Answer your questions",
                "{name}, I was created to:\n1. Increase security awareness\n2. Prevent cyber crimes\n3. Share best practices\n4. Make the web safer",
                "{name}, my mission includes:\n~ Cybersecurity education\n~ Threat prevention\n~ Safe browsing guidance\n~ Password protection",
                "{name}, I exist to:\n> Identify digital risks\n> Recommend security measures\n> Explain security concepts\n> Help you stay safe online",
            ],
        )?,
        InterestPolicy::None,
    ))
}

pub fn password_safety() -> Result<TopicHandler, BankError> {
    Ok(TopicHandler::new(
        "password-safety",
        Some("password safety"),
        &["password", "passwords", "secure password"],
        bank(
            "password",
            &[
                "Strong Password Guidelines:\n- Use at least 12 characters\n- Combine uppercase, lowercase, numbers & symbols\n- Avoid personal information\n- Use unique passwords for each account\n\nPro Tip: Use passphrases like 'Coffee@RainyCapeTown2023!'",
                "Password Safety Tips:\n1. Never share your passwords\n2. Change passwords every 3-6 months\n3. Use a password manager\n4. Enable two-factor authentication\n\nRemember, a strong password is your first defense!",
                "Creating Secure Passwords:\n• Length is more important than complexity\n• Avoid dictionary words\n• Consider using the first letters of a sentence\n• Example: 'I love hiking in Table Mountain every Sunday!' becomes 'IlhiTMeS!'",
                "Password Security Facts:\n- 80% of hacking breaches involve weak passwords\n- Adding just one special character makes a password 10x harder to crack\n- The most common password is still '123456' - don't be that person!",
                "Advanced Password Tips:\n1. Use a different password for every account\n2. Consider using passwordless authentication where available\n3. Regularly change your password to ensure ultimate safety",
            ],
        )?,
        InterestPolicy::OnRemember {
            key: "interest",
            value: "password safety",
            prefix: "Since you're interested in password safety, {name}, here's more:",
            ack: "I'll remember you're interested in password safety, {name}!",
        },
    ))
}

pub fn phishing() -> Result<TopicHandler, BankError> {
    Ok(TopicHandler::new(
        "phishing",
        Some("phishing"),
        &["phishing", "scam", "email scam"],
        bank(
            "phishing",
            &[
                "How to Spot Phishing Attempts:\n- Check sender email addresses carefully\n- Hover over links to see actual URLs\n- Look for poor grammar/spelling\n- Be wary of urgent requests\n- Verify unexpected attachments\n\nREMEMBER banks will NEVER ask for your PIN via email/SMS",
                "Phishing Red Flags:\n1. Generic greetings like 'Dear Customer'\n2. Threats of account closure\n3. Requests for immediate action\n4. Suspicious attachments\n\nWhen in doubt, contact the organization directly!",
                "Anti-Phishing Tips:\n• Don't click links in unsolicited emails\n• Bookmark important sites instead of clicking links\n• Check for HTTPS in URLs\n• Keep your browser updated",
                "Advanced Phishing Defense:\n~ Enable email filtering\n~ Use email authentication\n~ Verify sender phone numbers independently\n~ Report phishing attempts to your IT department",
                "Phishing Statistics:\n- 90% of data breaches start with phishing\n- Employees receive 14 malicious emails per year on average\n- Spear phishing accounts for 65% of targeted attacks",
            ],
        )?,
        InterestPolicy::OnRemember {
            key: "important_topic",
            value: "phishing",
            prefix: "{name}, since phishing is important to you:",
            ack: "I'll remember that phishing is an important topic for you, {name}!",
        },
    ))
}

pub fn browsing() -> Result<TopicHandler, BankError> {
    Ok(TopicHandler::new(
        "browsing",
        Some("safe browsing"),
        &["browsing", "safe internet", "https"],
        bank(
            "browsing",
            &[
                "Safe Browsing Practices:\n- Always look for HTTPS in website URLs\n- Keep your browser and plugins updated\n- Use a reputable antivirus program\n- Avoid public Wi-Fi for sensitive transactions\n- Clear browser cache and cookies regularly",
                "Internet Safety Tips:\n1. Verify website security before entering credentials\n2. Use ad-blockers to avoid malicious ads\n3. Be cautious with downloads\n4. Check privacy policies of websites",
                "Secure Web Browsing:\n• Use privacy-focused browsers when possible\n• Enable phishing protection in your browser\n• Review extension permissions regularly\n• Consider using a separate browser for financial transactions",
                "Browser Security Enhancements:\n~ Enable automatic updates\n~ Use secure DNS\n~ Disable Flash and Java plugins\n~ Regularly clear browsing data",
                "Dangerous Online Behaviors to Avoid:\n- Using the same password across sites\n- Ignoring browser security warnings\n- Downloading software from untrusted sources\n- Clicking 'Remember me' on public computers",
            ],
        )?,
        InterestPolicy::None,
    ))
}

pub fn social_engineering() -> Result<TopicHandler, BankError> {
    Ok(TopicHandler::new(
        "social-engineering",
        Some("social engineering"),
        &["social engineering", "phone scam", "impersonation"],
        bank(
            "social_engineering",
            &[
                "Social Engineering Awareness:\n- Never share sensitive information over the phone\n- Verify identities before granting access\n- Be cautious of 'too good to be true' offers\n- Don't plug in unknown USB devices\n- Report suspicious requests to your IT department",
                "Avoiding Social Engineering:\n1. Question unexpected requests for information\n2. Verify unusual requests through another channel\n3. Be wary of urgent or threatening language\n4. Educate family members about common scams",
                "Common Social Engineering Tactics:\n• Pretexting (creating fake scenarios)\n• Baiting (offering something enticing)\n• Quid pro quo (offering something in exchange)\n• Tailgating (following into secure areas)",
                "Real-World Social Engineering Examples:\n- Tech support scams claiming your computer is infected\n- Fake IT staff asking for your password\n- 'CEO fraud' emails requesting urgent wire transfers\n- Fake job offers requesting personal information",
                "Psychological Triggers Exploited:\n~ Authority (pretending to be someone important)\n~ Urgency (creating time pressure)\n~ Familiarity (pretending to know you)\n~ Social proof (claiming others have complied)",
            ],
        )?,
        InterestPolicy::OnRepeat {
            key: "last_social_engineering_response",
            prefix: "{name}, building on our previous talk about social engineering:",
        },
    ))
}

pub fn two_factor_auth() -> Result<TopicHandler, BankError> {
    Ok(TopicHandler::new(
        "two-factor-auth",
        Some("two-factor authentication"),
        &["2fa", "two factor", "authentication"],
        bank(
            "two_factor",
            &[
                "Two-Factor Authentication (2FA):\n- Always enable 2FA where available\n- Use authenticator apps instead of SMS when possible\n- Keep backup codes in a secure place\n- Consider hardware security keys for high-value accounts\n- Review authorized devices regularly",
                "Benefits of 2FA:\n1. Adds an extra layer of security beyond passwords\n2. Protects against credential stuffing attacks\n3. Can prevent unauthorized access even if password is compromised\n4. Available on most major platforms",
                "Implementing 2FA:\n• Use apps like Google Authenticator\n• Set up backup methods in case you lose your primary\n• Be cautious of 2FA code requests (could be phishing)\n• Consider using biometric 2FA where available",
                "2FA Statistics:\n- Reduces account takeover risk by 99.9%\n- Only 28% of users enable it when available\n- SMS 2FA is better than nothing but vulnerable to SIM swapping\n- Push notification 2FA has the highest user adoption",
                "Advanced 2FA Tips:\n~ Use different 2FA methods for different accounts\n~ Store backup codes in a password manager\n~ Register multiple devices for critical accounts\n~ Periodically review active 2FA sessions",
            ],
        )?,
        InterestPolicy::OnRemember {
            key: "2fa_interest",
            value: "yes",
            prefix: "{name}, since you asked about 2FA before:",
            ack: "I'll remember your interest in two-factor authentication, {name}!",
        },
    ))
}

/// Static menu line the catch-all appends to every fallback response.
pub const TOPIC_MENU: &str =
    "Try asking about: passwords, phishing, safe browsing, social engineering, or 2FA.";

pub fn fallback() -> Result<FallbackHandler, BankError> {
    Ok(FallbackHandler::new(
        bank(
            "default",
            &[
                "I didn't quite understand that. Could you rephrase?",
                "I'm not sure I follow. Can you try asking differently?",
                "That's not something I'm programmed to handle. Try asking about cybersecurity topics.",
            ],
        )?,
        TOPIC_MENU,
    ))
}
