//! Built-in curriculum content.
//!
//! The single canonical definition of the ten security-awareness modules.
//! Text is presentation-ready markdown; challenges carry the expected
//! concept keyword used by the grader.

use super::module::{Module, ModuleId};
use super::step::Step;

fn module(id: &str, title: &str, steps: Vec<Step>) -> Module {
    Module::new(ModuleId::new(id), title, steps).expect("built-in module content is valid")
}

/// Returns the ten built-in training modules in curriculum order.
pub(super) fn builtin_modules() -> Vec<Module> {
    vec![
        module(
            "Module 1",
            "Phishing & Social Engineering",
            vec![
                Step::instruction(
                    "Welcome to **Module 1: Phishing & Social Engineering Awareness!** In the next \
                     5 minutes, you'll learn how to spot and report these common threats to protect \
                     both yourself and UETCL.",
                ),
                Step::instruction(
                    "Phishing is a fraudulent attempt to obtain sensitive information by disguising \
                     as a trustworthy entity. Key signs include a sense of urgency, generic \
                     greetings, mismatched URLs, and poor grammar.",
                ),
                Step::qa_prompt(
                    "What questions do you have about phishing? **When ready to continue, type \
                     'continue'.**",
                ),
                Step::challenge(
                    "An email arrives with the subject **'URGENT: Your Email Account Storage is \
                     Full'** from **'UETCL IT Support <IT.Helpdesk@uetcl-logins.com>'**. It demands \
                     you click a link within one hour. What is the correct action?",
                    "report",
                ),
                Step::final_step(
                    "Congratulations, you have completed the Phishing & Social Engineering \
                     Awareness module!",
                ),
            ],
        ),
        module(
            "Module 2",
            "Password & Access Control",
            vec![
                Step::instruction(
                    "Welcome to **Module 2: Mastering Password & Access Control**! This module \
                     covers the most important rules for keeping your account secure.",
                ),
                Step::instruction(
                    "According to UETCL policy, your password **must** be at least **12 characters \
                     long** and contain a mix of **three** of the following four types: uppercase \
                     letters, lowercase letters, numbers, and special characters.",
                ),
                Step::instruction(
                    "Furthermore, you must change your password every **42 days**, and you cannot \
                     reuse any of your last five passwords. Never share your password with anyone, \
                     including IT staff.",
                ),
                Step::qa_prompt(
                    "What questions do you have about these rules? **When you are ready to \
                     continue, type 'continue'.**",
                ),
                Step::challenge(
                    "Let's test your knowledge. A colleague tells you they use the password \
                     **'UetclRocks!23'**. Does this password comply with UETCL policy?",
                    "yes",
                ),
                Step::final_step(
                    "Excellent work! You have completed the Password & Access Control module.",
                ),
            ],
        ),
        module(
            "Module 3",
            "Incident Reporting & Response",
            vec![
                Step::instruction(
                    "Welcome to **Module 3: Incident Reporting & Response**! A security incident is \
                     any event that violates security policy, like a virus, lost device, or \
                     unauthorized access. Your role in reporting these incidents quickly is crucial.",
                ),
                Step::instruction(
                    "According to UETCL policy, all suspected security incidents **must be reported \
                     immediately** to the **ICT Helpdesk**. Do not attempt to investigate or fix the \
                     issue yourself, as this can sometimes cause more damage.",
                ),
                Step::qa_prompt(
                    "Do you have any questions about what to report or how? **When you are ready \
                     to continue, just type 'continue'.**",
                ),
                Step::challenge(
                    "You find a USB flash drive labeled 'Q3 Finances' in the parking lot. What is \
                     the correct action to take according to the incident response policy?",
                    "report",
                ),
                Step::final_step(
                    "You have successfully completed the Incident Reporting & Response module. \
                     Remember, fast reporting is key to security!",
                ),
            ],
        ),
        module(
            "Module 4",
            "Data Handling & Classification",
            vec![
                Step::instruction(
                    "Welcome to **Module 4: Data Handling & Information Classification**! This \
                     module explains how to handle UETCL data based on its sensitivity.",
                ),
                Step::instruction(
                    "UETCL classifies data into three levels: **Confidential**, **Restricted**, and \
                     **Public**. 'Confidential' is the most sensitive data, while 'Public' data is \
                     approved for release to everyone. You must handle data according to its \
                     classification level.",
                ),
                Step::qa_prompt(
                    "Ask me any questions you have about the data classification levels. **When you \
                     are ready to continue, type 'continue'.**",
                ),
                Step::challenge(
                    "A colleague from another department asks you to email them a customer list, \
                     which is classified as 'Restricted'. What is the first thing you should verify \
                     before sending it?",
                    "authorized",
                ),
                Step::final_step(
                    "Great work! You've completed the Data Handling module. Proper classification \
                     protects us all.",
                ),
            ],
        ),
        module(
            "Module 5",
            "Safe Internet & Email Use",
            vec![
                Step::instruction(
                    "Welcome to **Module 5: Safe Internet & Email Use**! This module covers the \
                     acceptable use of UETCL's digital resources.",
                ),
                Step::instruction(
                    "UETCL's internet and email are provided for official company business. \
                     Incidental personal use is permitted but should not interfere with your work. \
                     Accessing or distributing offensive or illegal material is strictly prohibited.",
                ),
                Step::qa_prompt(
                    "What questions do you have about the acceptable use policy? **When ready, type \
                     'continue'.**",
                ),
                Step::challenge(
                    "You used the office internet to download a large movie file for personal \
                     viewing after work. Which part of the policy might this action violate?",
                    "personal use",
                ),
                Step::final_step(
                    "You have completed the Safe Internet & Email Use module. Thank you for using \
                     our resources responsibly.",
                ),
            ],
        ),
        module(
            "Module 6",
            "Physical & Environmental Security",
            vec![
                Step::instruction(
                    "Welcome to **Module 6: Physical & Environmental Security**! Protecting our \
                     physical assets is as important as our digital ones.",
                ),
                Step::instruction(
                    "Key policies include wearing your ID badge at all times, escorting all \
                     visitors, and maintaining a 'clean desk' policy, which means securing sensitive \
                     documents when you are away from your desk.",
                ),
                Step::qa_prompt(
                    "Feel free to ask any questions about physical security. **To continue, type \
                     'continue'.**",
                ),
                Step::challenge(
                    "You are leaving your desk for a 30-minute meeting. There is a printed document \
                     marked 'Confidential' on your desk. What should you do with it?",
                    "lock",
                ),
                Step::final_step("Module complete! A secure building starts with all of us."),
            ],
        ),
        module(
            "Module 7",
            "Secure Remote Access",
            vec![
                Step::instruction(
                    "Welcome to **Module 7: Secure Remote Access**! This module covers how to work \
                     safely from outside the UETCL office.",
                ),
                Step::instruction(
                    "The only approved method for accessing the internal UETCL network from an \
                     external location is through the company-provided **Virtual Private Network \
                     (VPN)**. Connecting directly from public Wi-Fi is not secure and is prohibited.",
                ),
                Step::qa_prompt(
                    "Ask away with any remote access questions. **When you're ready, type \
                     'continue'.**",
                ),
                Step::challenge(
                    "You are working from a coffee shop using their password-protected Wi-Fi. To \
                     access your files on the UETCL server, is connecting to the Wi-Fi enough?",
                    "no",
                ),
                Step::final_step(
                    "You've completed the Secure Remote Access module. Stay safe out there!",
                ),
            ],
        ),
        module(
            "Module 8",
            "Mobile & Personal Device Security",
            vec![
                Step::instruction(
                    "Welcome to **Module 8: Mobile & Personal Device Security**! Let's cover \
                     security for devices on the go.",
                ),
                Step::instruction(
                    "If a UETCL-owned mobile device is lost or stolen, you must report it to the \
                     ICT Helpdesk as a security incident **immediately**. For personally-owned \
                     devices, connecting to the internal network requires authorization and \
                     compliance with security standards.",
                ),
                Step::qa_prompt(
                    "I'm here for any questions on mobile security. **Type 'continue' to proceed.**",
                ),
                Step::challenge(
                    "You realize you left your company-issued tablet in a taxi. You think it will \
                     probably be turned in, so you decide to wait a day before reporting it. Is \
                     this the correct procedure?",
                    "no",
                ),
                Step::final_step(
                    "You have completed the Mobile & Personal Device Security module!",
                ),
            ],
        ),
        module(
            "Module 9",
            "Software Management & Licensing",
            vec![
                Step::instruction(
                    "Welcome to **Module 9: Software Management & Licensing**! This module is about \
                     the safe and legal use of software.",
                ),
                Step::instruction(
                    "You are prohibited from installing any unlicensed, unauthorized, or personal \
                     software on UETCL computers. All software must be approved and installed by \
                     the ICT department to avoid security risks and legal issues.",
                ),
                Step::qa_prompt(
                    "Any questions about software policy? **Type 'continue' to proceed.**",
                ),
                Step::challenge(
                    "You find a free, open-source note-taking app that you love. Can you install it \
                     on your work laptop yourself?",
                    "no",
                ),
                Step::final_step(
                    "Module complete. Thank you for helping UETCL maintain a secure and compliant \
                     software environment.",
                ),
            ],
        ),
        module(
            "Module 10",
            "Social Media & Public Representation",
            vec![
                Step::instruction(
                    "Welcome to the final module, **Module 10: Social Media & Public \
                     Representation**! This covers how we represent UETCL online.",
                ),
                Step::instruction(
                    "When using social media, you must not disclose any confidential UETCL \
                     information. Always maintain a professional tone when discussing work-related \
                     matters, and make it clear when you are speaking in a personal capacity versus \
                     as a representative of the company.",
                ),
                Step::qa_prompt(
                    "Ask me anything about the social media policy. **Type 'continue' to finish.**",
                ),
                Step::challenge(
                    "You have a disagreement with a UETCL business partner and post a frustrated \
                     comment about them on your private LinkedIn page. Could this violate company \
                     policy?",
                    "yes",
                ),
                Step::final_step(
                    "Congratulations, you have completed the entire cybersecurity training \
                     curriculum! Your dedication to security is appreciated.",
                ),
            ],
        ),
    ]
}
