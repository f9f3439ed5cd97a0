pub const PASSWORD_DOCUMENTATION: &str = "
  What are the main risks?

    The websites and applications you use are attacked every day. Breaches happen
    and password databases get stolen.
    Reusing a password means one stolen database opens every account that shares it.
    Turn on two-factor authentication wherever you can, and prefer an authenticator
    app over SMS codes.
    Do not open unknown links and do not install software you cannot trust.


  Recommendations:

    - Use a unique password for every account.
    - Avoid anything related to you: names, addresses, dates.
    - Use at least 14 characters, with digits and special characters scattered
      through the password rather than at its ends.
    - Never share a password, not even with people you trust.
    - Do not write passwords down or store them in plain files.
    - Log out after using a computer that is not yours.
    - Do not send secrets by SMS, email or over unencrypted protocols (http, ftp).
    - Keep separate email addresses for separate purposes.


  Sources:

    dropbox.tech/security/zxcvbn-realistic-password-strength-estimation
    ssi.gouv.fr/guide/password
    en.wikipedia.org/wiki/Password_strength
";

pub fn show_documentation() {
    println!("{}", PASSWORD_DOCUMENTATION);
}
